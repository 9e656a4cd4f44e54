//! Runner error types.

/// Errors that prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Input validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Trigger payload errors.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// ClickUp client initialization errors.
    #[error(transparent)]
    ClickUp(#[from] crate::clickup::ClickUpError),

    /// GitHub client initialization errors.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),
}
