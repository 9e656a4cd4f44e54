//! Run summary types.

use super::{Phase, PhaseFailure};
use crate::comments::{CommentStatus, TaskComment};
use crate::description::DescriptionStatus;
use crate::status_updates::StatusUpdateResult;
use tracing::warn;

/// Summary of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of references extracted from the title, duplicates included.
    pub references_found: usize,

    /// Number of task statuses successfully updated.
    pub statuses_updated: usize,

    /// Number of back-link comments posted.
    pub comments_posted: usize,

    /// Number of tasks skipped because they already link the pull request.
    pub comments_skipped: usize,

    /// Number of comments ClickUp rejected as bad requests.
    pub comments_rejected: usize,

    /// Number of tasks newly linked in the pull request description.
    pub links_added: usize,

    /// Whether the pull request description was rewritten.
    pub description_updated: bool,

    /// Every non-benign failure, in the order it happened.
    pub failures: Vec<PhaseFailure>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(references_found: usize) -> Self {
        Self {
            references_found,
            ..Default::default()
        }
    }

    /// Updates the summary with a status update result.
    pub fn record_status_update(&mut self, result: &StatusUpdateResult) {
        match result {
            StatusUpdateResult::Updated { .. } => self.statuses_updated += 1,
            StatusUpdateResult::Failed { reference, error } => self.failures.push(PhaseFailure {
                phase: Phase::StatusUpdate,
                reference: Some(reference.clone()),
                error: error.clone(),
            }),
        }
    }

    /// Updates the summary with a comment result.
    pub fn record_comment(&mut self, comment: &TaskComment) {
        match &comment.status {
            CommentStatus::Posted => self.comments_posted += 1,
            CommentStatus::AlreadyLinked => self.comments_skipped += 1,
            CommentStatus::Rejected { .. } => self.comments_rejected += 1,
            CommentStatus::Failed { error } => self.failures.push(PhaseFailure {
                phase: Phase::TaskComment,
                reference: Some(comment.reference.clone()),
                error: error.clone(),
            }),
        }
    }

    /// Updates the summary with the description outcome.
    pub fn record_description(&mut self, status: &DescriptionStatus) {
        match status {
            DescriptionStatus::Updated { added } => {
                self.description_updated = true;
                self.links_added = added.len();
            }
            DescriptionStatus::Unchanged => {}
            DescriptionStatus::Failed { error } => self.failures.push(PhaseFailure {
                phase: Phase::DescriptionUpdate,
                reference: None,
                error: error.clone(),
            }),
        }
    }

    /// Records a failure that isn't tied to a single result.
    pub fn record_failure(&mut self, failure: PhaseFailure) {
        warn!(phase = %failure.phase, error = %failure.error, "Recording failure");
        self.failures.push(failure);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::TaskReference;

    #[test]
    fn counts_successes_without_failing() {
        let mut summary = RunSummary::new(2);

        summary.record_status_update(&StatusUpdateResult::Updated {
            reference: TaskReference::new("A1"),
        });
        summary.record_comment(&TaskComment {
            reference: TaskReference::new("A1"),
            status: CommentStatus::Posted,
        });
        summary.record_comment(&TaskComment {
            reference: TaskReference::new("B2"),
            status: CommentStatus::Rejected {
                reason: "duplicate".to_string(),
            },
        });
        summary.record_description(&DescriptionStatus::Updated {
            added: vec![TaskReference::new("A1")],
        });

        assert_eq!(summary.statuses_updated, 1);
        assert_eq!(summary.comments_posted, 1);
        assert_eq!(summary.comments_rejected, 1);
        assert_eq!(summary.links_added, 1);
        assert!(summary.description_updated);
        assert!(!summary.has_failures());
    }

    #[test]
    fn records_failures_with_phase() {
        let mut summary = RunSummary::new(1);

        summary.record_status_update(&StatusUpdateResult::Failed {
            reference: TaskReference::new("A1"),
            error: "boom".to_string(),
        });
        summary.record_description(&DescriptionStatus::Failed {
            error: "gone".to_string(),
        });

        assert!(summary.has_failures());
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].phase, Phase::StatusUpdate);
        assert_eq!(summary.failures[1].phase, Phase::DescriptionUpdate);
        assert_eq!(summary.failures[1].reference, None);
    }
}
