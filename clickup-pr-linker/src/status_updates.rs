//! Task status updates.
//!
//! Every referenced task is moved to the configured status. Updates are
//! unconditional overwrites, so re-running a job re-sends them.

use crate::clickup::TaskService;
use crate::references::TaskReference;
use tracing::{error, info, info_span, Instrument};

/// Result of updating one task's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdateResult {
    /// The task now has the requested status.
    Updated {
        /// Task that was updated.
        reference: TaskReference,
    },

    /// The update request failed.
    Failed {
        /// Task that was not updated.
        reference: TaskReference,
        /// Error message.
        error: String,
    },
}

/// Sets `status` on every referenced task, in order.
///
/// A failure on one reference is recorded and the next one is still
/// attempted. One result is returned per reference.
pub async fn update_task_statuses<T>(
    tasks: &T,
    references: &[TaskReference],
    status: &str,
) -> Vec<StatusUpdateResult>
where
    T: TaskService + ?Sized,
{
    let span = info_span!("update_statuses", status, count = references.len());

    async {
        let mut results = Vec::with_capacity(references.len());

        for reference in references {
            let result = match tasks.update_task_status(reference, status).await {
                Ok(()) => {
                    info!(task_id = %reference, status, "Updated ClickUp task status");
                    StatusUpdateResult::Updated {
                        reference: reference.clone(),
                    }
                }
                Err(e) => {
                    error!(task_id = %reference, error = %e, "Failed to update ClickUp task status");
                    StatusUpdateResult::Failed {
                        reference: reference.clone(),
                        error: e.to_string(),
                    }
                }
            };
            results.push(result);
        }

        results
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTaskService;

    fn refs(ids: &[&str]) -> Vec<TaskReference> {
        ids.iter().map(|id| TaskReference::new(*id)).collect()
    }

    #[tokio::test]
    async fn updates_every_reference_in_order() {
        let tasks = FakeTaskService::new();
        let results = update_task_statuses(&tasks, &refs(&["A1", "B2"]), "in review").await;

        assert!(results
            .iter()
            .all(|r| matches!(r, StatusUpdateResult::Updated { .. })));
        assert_eq!(
            tasks.calls(),
            vec!["update_task_status A1 in review", "update_task_status B2 in review"]
        );
    }

    #[tokio::test]
    async fn failure_on_second_reference_still_attempts_third() {
        let tasks = FakeTaskService::new().failing_status_update("B2");
        let results = update_task_statuses(&tasks, &refs(&["A1", "B2", "C3"]), "done").await;

        assert_eq!(tasks.calls().len(), 3);
        assert!(matches!(&results[0], StatusUpdateResult::Updated { .. }));
        assert!(matches!(
            &results[1],
            StatusUpdateResult::Failed { reference, .. } if reference.as_str() == "B2"
        ));
        assert!(matches!(&results[2], StatusUpdateResult::Updated { .. }));
    }

    #[tokio::test]
    async fn duplicate_references_are_updated_twice() {
        let tasks = FakeTaskService::new();
        let results = update_task_statuses(&tasks, &refs(&["AB1", "AB1"]), "done").await;

        assert_eq!(results.len(), 2);
        assert_eq!(tasks.calls().len(), 2);
    }
}
