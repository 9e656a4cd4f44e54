//! ClickUp error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the ClickUp API.
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// The request never produced a response, or the response body was unreadable.
    #[error("ClickUp {operation} request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// ClickUp answered with a non-success status.
    #[error("ClickUp {operation} returned {status}: {body}")]
    Api {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build ClickUp HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL can't carry API paths.
    #[error("Invalid ClickUp API base URL '{url}'")]
    InvalidBaseUrl { url: String },
}

impl ClickUpError {
    /// Returns true if ClickUp rejected the request as a bad request (HTTP 400).
    ///
    /// ClickUp answers duplicate comment submissions this way.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::BAD_REQUEST)
    }
}
