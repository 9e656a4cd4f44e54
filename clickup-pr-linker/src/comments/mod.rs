//! Back-link comments on ClickUp tasks.
//!
//! Each referenced task gets a comment pointing at the pull request, unless
//! one of its existing comments already links the pull request URL.

mod status;

pub use status::{CommentStatus, TaskComment};

use crate::clickup::{ClickUpError, TaskService};
use crate::references::TaskReference;
use crate::templates::contains_link;
use tracing::{error, info, info_span, warn, Instrument};

/// Posts `comment_text` on every referenced task that isn't linked yet.
///
/// `pull_request_url` is the text searched for in existing comments; the
/// comment itself must contain it. References are handled independently:
/// a failure on one doesn't stop the next.
pub async fn add_back_link_comments<T>(
    tasks: &T,
    references: &[TaskReference],
    pull_request_url: &str,
    comment_text: &str,
) -> Vec<TaskComment>
where
    T: TaskService + ?Sized,
{
    let span = info_span!("add_comments", pull_request = %pull_request_url);

    async {
        let mut results = Vec::with_capacity(references.len());

        for reference in references {
            let status =
                match add_back_link_comment(tasks, reference, pull_request_url, comment_text)
                    .await
                {
                    Ok(status) => status,
                    Err(e) if e.is_bad_request() => {
                        warn!(task_id = %reference, error = %e, "ClickUp rejected comment, continuing");
                        CommentStatus::Rejected {
                            reason: e.to_string(),
                        }
                    }
                    Err(e) => {
                        error!(task_id = %reference, error = %e, "Failed to add ClickUp comment");
                        CommentStatus::Failed {
                            error: e.to_string(),
                        }
                    }
                };

            results.push(TaskComment {
                reference: reference.clone(),
                status,
            });
        }

        results
    }
    .instrument(span)
    .await
}

/// Links a single task, checking its existing comments first.
async fn add_back_link_comment<T>(
    tasks: &T,
    reference: &TaskReference,
    pull_request_url: &str,
    comment_text: &str,
) -> Result<CommentStatus, ClickUpError>
where
    T: TaskService + ?Sized,
{
    let comments = tasks.get_task_comments(reference).await?;

    if comments
        .iter()
        .any(|comment| contains_link(&comment.comment_text, pull_request_url))
    {
        info!(task_id = %reference, "Task already links this pull request, skipping");
        return Ok(CommentStatus::AlreadyLinked);
    }

    tasks.create_task_comment(reference, comment_text).await?;
    info!(task_id = %reference, "Added pull request comment to ClickUp task");
    Ok(CommentStatus::Posted)
}
