//! Pull request description reconciliation.
//!
//! The description gains a "Linked ClickUp Tasks" section listing every
//! referenced task whose URL it doesn't already contain. Existing content is
//! never touched, and at most one section is appended per run.

mod error;
mod section;

pub use error::DescriptionError;
pub use section::LinkSection;

use crate::clickup::TaskService;
use crate::event::PullRequestContext;
use crate::github::PullRequestHost;
use crate::references::TaskReference;
use crate::templates::{contains_link, task_url, TemplateRenderer};
use tracing::{debug, error, info, info_span, Instrument};

/// Outcome of reconciling a pull request description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionStatus {
    /// A section was appended for these references.
    Updated {
        /// References that received a bullet line.
        added: Vec<TaskReference>,
    },

    /// Every reference was already linked; nothing was written.
    Unchanged,

    /// A fetch or the write failed; remaining work was abandoned.
    Failed {
        /// Error message.
        error: String,
    },
}

/// Appends links for unlinked references to the pull request description.
///
/// The body is fetched fresh. Task names are looked up only for references
/// that still need a bullet line.
pub async fn reconcile_description<T, P>(
    tasks: &T,
    pulls: &P,
    pull_request: &PullRequestContext,
    references: &[TaskReference],
    renderer: &TemplateRenderer,
) -> DescriptionStatus
where
    T: TaskService + ?Sized,
    P: PullRequestHost + ?Sized,
{
    let span = info_span!("update_description", pull_request = pull_request.number);

    async {
        match try_reconcile(tasks, pulls, pull_request, references, renderer).await {
            Ok(status) => status,
            Err(e) => {
                error!(error = %e, "Failed to update pull request description");
                DescriptionStatus::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
    .instrument(span)
    .await
}

async fn try_reconcile<T, P>(
    tasks: &T,
    pulls: &P,
    pull_request: &PullRequestContext,
    references: &[TaskReference],
    renderer: &TemplateRenderer,
) -> Result<DescriptionStatus, DescriptionError>
where
    T: TaskService + ?Sized,
    P: PullRequestHost + ?Sized,
{
    let body = pulls
        .pull_request_body(pull_request)
        .await?
        .unwrap_or_default();

    let mut section = LinkSection::new();
    for reference in references {
        let url = task_url(reference);
        if contains_link(&body, &url) || section.mentions(&url) {
            debug!(task_id = %reference, "Task already linked in description");
            continue;
        }

        let task = tasks.get_task(reference).await?;
        section.push(reference.clone(), renderer.render_task_link(&task.name, &url)?);
    }

    if section.is_empty() {
        info!("All tasks already linked in pull request description");
        return Ok(DescriptionStatus::Unchanged);
    }

    let new_body = section.append_to(&body);
    pulls
        .update_pull_request_body(pull_request, &new_body)
        .await?;

    let added = section.references();
    info!(count = added.len(), "Linked ClickUp tasks in pull request description");
    Ok(DescriptionStatus::Updated { added })
}
