//! Description update error types.

use thiserror::Error;

/// Errors that abort a description update.
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// Fetching a task failed.
    #[error(transparent)]
    ClickUp(#[from] crate::clickup::ClickUpError),

    /// Fetching or writing the pull request failed.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),

    /// Rendering a bullet line failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
