//! Trigger payload error types.

use thiserror::Error;

/// Errors that can occur while reading the pull request event payload.
#[derive(Debug, Error)]
pub enum EventError {
    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON for a pull request event.
    #[error("Failed to parse event payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The event was not triggered by a pull request.
    #[error("Event payload has no pull_request; run this action on pull request events")]
    MissingPullRequest,

    /// The event carries no repository information.
    #[error("Event payload has no repository")]
    MissingRepository,
}
