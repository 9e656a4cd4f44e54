//! Orchestrates linking a pull request to its ClickUp tasks.
//!
//! A run moves through fixed steps:
//! extract references, then (if any) update statuses, then optionally post
//! back-link comments, then optionally update the description. Failures are
//! collected in the [`RunSummary`]; no step is skipped because an earlier
//! one failed.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::clickup::{ClickUpClient, TaskService};
use crate::comments::add_back_link_comments;
use crate::description::reconcile_description;
use crate::github::{GitHubPullRequests, PullRequestHost};
use crate::references::{extract_references, TaskReference};
use crate::status_updates::update_task_statuses;
use crate::summary::{Phase, PhaseFailure, RunSummary};
use crate::templates::{pull_request_url, TemplateRenderer};
use tracing::{info, info_span, Instrument};

/// How a run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The title referenced no tasks; nothing was called.
    NoReferences,

    /// All enabled steps ran.
    Completed(RunSummary),
}

impl RunOutcome {
    /// Returns the summary of a completed run.
    #[must_use]
    pub fn summary(&self) -> Option<&RunSummary> {
        match self {
            Self::NoReferences => None,
            Self::Completed(summary) => Some(summary),
        }
    }

    /// Returns true if any step recorded a failure.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary().is_some_and(RunSummary::has_failures)
    }
}

/// Links one pull request to the ClickUp tasks named in its title.
pub struct Runner<T = ClickUpClient, P = GitHubPullRequests> {
    config: RunnerConfig,
    tasks: T,
    pulls: P,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner with ClickUp and GitHub clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if either client can't be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let tasks = ClickUpClient::with_base_url(
            config.clickup_api_key(),
            config.clickup_api_url().clone(),
        )?;
        let pulls = GitHubPullRequests::new(config.github_token(), config.github_api_url())?;
        Ok(Self::with_services(config, tasks, pulls))
    }
}

impl<T, P> Runner<T, P>
where
    T: TaskService,
    P: PullRequestHost,
{
    /// Builds a runner around existing service implementations.
    pub fn with_services(config: RunnerConfig, tasks: T, pulls: P) -> Self {
        Self {
            config,
            tasks,
            pulls,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Executes the full flow.
    pub async fn run(&self) -> RunOutcome {
        let pull_request = self.config.pull_request();
        let span = info_span!(
            "link_pull_request",
            repo = %pull_request.full_name(),
            pull_request = pull_request.number
        );

        async {
            info!(title = %pull_request.title, "Scanning pull request title");
            let references = extract_references(&pull_request.title);

            if references.is_empty() {
                info!("No ClickUp task references found in pull request title, skipping");
                return RunOutcome::NoReferences;
            }

            info!(
                count = references.len(),
                references = %join_references(&references),
                "Extracted ClickUp task references"
            );

            let mut summary = RunSummary::new(references.len());

            for result in
                update_task_statuses(&self.tasks, &references, self.config.new_status()).await
            {
                summary.record_status_update(&result);
            }

            if self.config.add_task_comment().is_enabled() {
                self.add_comments(&references, &mut summary).await;
            }

            if self.config.update_description().is_enabled() {
                let status = reconcile_description(
                    &self.tasks,
                    &self.pulls,
                    pull_request,
                    &references,
                    &self.renderer,
                )
                .await;
                summary.record_description(&status);
            }

            RunOutcome::Completed(summary)
        }
        .instrument(span)
        .await
    }

    async fn add_comments(&self, references: &[TaskReference], summary: &mut RunSummary) {
        let pull_request = self.config.pull_request();
        let comment_text = match self
            .renderer
            .render_comment(self.config.comment_template(), pull_request)
        {
            Ok(text) => text,
            Err(e) => {
                summary.record_failure(PhaseFailure {
                    phase: Phase::TaskComment,
                    reference: None,
                    error: e.to_string(),
                });
                return;
            }
        };

        let url = pull_request_url(pull_request);
        for comment in add_back_link_comments(&self.tasks, references, &url, &comment_text).await {
            summary.record_comment(&comment);
        }
    }
}

fn join_references(references: &[TaskReference]) -> String {
    references
        .iter()
        .map(TaskReference::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
