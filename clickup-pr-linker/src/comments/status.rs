//! Comment status types.

use crate::references::TaskReference;
use serde::Serialize;

/// Status of a back-link comment operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommentStatus {
    /// A new comment was posted.
    Posted,

    /// An existing comment already links the pull request.
    AlreadyLinked,

    /// ClickUp rejected the comment as a bad request (e.g. duplicate submission).
    Rejected {
        /// Error message.
        reason: String,
    },

    /// Fetching comments or posting failed.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Outcome of linking one task back to the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskComment {
    /// Task the comment targets.
    pub reference: TaskReference,

    /// What happened.
    pub status: CommentStatus,
}
