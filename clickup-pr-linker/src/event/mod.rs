//! Pull request context from the GitHub Actions event payload.
//!
//! GitHub Actions writes the triggering webhook payload to the file named by
//! `GITHUB_EVENT_PATH`. Only the handful of fields needed to address the pull
//! request are read here.

mod error;

pub use error::EventError;

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The pull request a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Pull request number.
    pub number: u64,
    /// Pull request title at the time of the event.
    pub title: String,
}

impl PullRequestContext {
    /// Returns the repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

/// Loads the pull request context from an event payload file.
///
/// # Errors
///
/// Returns [`EventError`] if the file can't be read or lacks pull request
/// or repository information.
pub fn load_pull_request_context(path: &Path) -> Result<PullRequestContext, EventError> {
    debug!(path = %path.display(), "Reading event payload");

    let content = std::fs::read_to_string(path).map_err(|e| EventError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_pull_request_context(&content)
}

/// Parses the pull request context from event payload JSON.
///
/// # Errors
///
/// Returns [`EventError`] if the JSON is malformed or lacks pull request or
/// repository information.
pub fn parse_pull_request_context(json: &str) -> Result<PullRequestContext, EventError> {
    let payload: EventPayload = serde_json::from_str(json)?;
    let pull_request = payload.pull_request.ok_or(EventError::MissingPullRequest)?;
    let repository = payload.repository.ok_or(EventError::MissingRepository)?;

    Ok(PullRequestContext {
        owner: repository.owner.login,
        repo: repository.name,
        number: pull_request.number,
        title: pull_request.title,
    })
}
