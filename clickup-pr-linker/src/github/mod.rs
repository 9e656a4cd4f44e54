//! Pull request access on GitHub.
//!
//! [`PullRequestHost`] covers the two pull request calls a run makes. The
//! production implementation is [`GitHubPullRequests`], backed by octocrab.

mod error;

pub use error::GitHubError;

use crate::event::PullRequestContext;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;
use url::Url;

/// Pull request body access.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Fetches the current pull request body. `None` if the body is empty.
    async fn pull_request_body(
        &self,
        pull_request: &PullRequestContext,
    ) -> Result<Option<String>, GitHubError>;

    /// Replaces the pull request body.
    async fn update_pull_request_body(
        &self,
        pull_request: &PullRequestContext,
        body: &str,
    ) -> Result<(), GitHubError>;
}

/// GitHub pull requests accessed through an authenticated [`Octocrab`] client.
#[derive(Debug, Clone)]
pub struct GitHubPullRequests {
    octocrab: Octocrab,
}

impl GitHubPullRequests {
    /// Builds a client authenticated with a personal or installation token.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the API URL is rejected or the client can't
    /// be constructed.
    pub fn new(token: &str, api_url: &Url) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_url.as_str())?
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

#[async_trait]
impl PullRequestHost for GitHubPullRequests {
    async fn pull_request_body(
        &self,
        pull_request: &PullRequestContext,
    ) -> Result<Option<String>, GitHubError> {
        debug!(pull_request = pull_request.number, "Fetching pull request");
        let pr = self
            .octocrab
            .pulls(&pull_request.owner, &pull_request.repo)
            .get(pull_request.number)
            .await?;
        Ok(pr.body)
    }

    async fn update_pull_request_body(
        &self,
        pull_request: &PullRequestContext,
        body: &str,
    ) -> Result<(), GitHubError> {
        debug!(pull_request = pull_request.number, "Updating pull request body");
        self.octocrab
            .pulls(&pull_request.owner, &pull_request.repo)
            .update(pull_request.number)
            .body(body)
            .send()
            .await?;
        Ok(())
    }
}
