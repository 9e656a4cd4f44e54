//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating action inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required input was absent or blank.
    #[error("Missing required input '{name}'")]
    MissingInput { name: &'static str },

    /// An endpoint override is not a usable URL.
    #[error("Invalid URL for '{name}': {message}")]
    InvalidUrl { name: &'static str, message: String },

    /// The comment template cannot be used for back-links.
    #[error("Invalid comment template: {message}")]
    InvalidTemplate { message: String },
}
