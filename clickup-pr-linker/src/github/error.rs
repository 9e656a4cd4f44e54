//! GitHub error types.

use thiserror::Error;

/// Errors that can occur while reading or updating a pull request.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),
}
