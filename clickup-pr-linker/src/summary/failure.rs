//! Failure records.

use crate::references::TaskReference;
use std::fmt;

/// The step of a run a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Setting task statuses.
    StatusUpdate,
    /// Posting back-link comments.
    TaskComment,
    /// Appending links to the pull request description.
    DescriptionUpdate,
}

impl Phase {
    /// Returns a human-readable description of the step.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StatusUpdate => "updating ClickUp task status",
            Self::TaskComment => "adding ClickUp task comment",
            Self::DescriptionUpdate => "updating pull request description",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure that marks the run as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseFailure {
    /// Step that failed.
    pub phase: Phase,
    /// Task being processed, if the failure is tied to one.
    pub reference: Option<TaskReference>,
    /// Error message.
    pub error: String,
}

impl fmt::Display for PhaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            Some(reference) => write!(f, "Error {} for task {reference}: {}", self.phase, self.error),
            None => write!(f, "Error {}: {}", self.phase, self.error),
        }
    }
}
