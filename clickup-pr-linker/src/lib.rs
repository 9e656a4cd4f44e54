#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod clickup;
pub mod comments;
pub mod config;
pub mod description;
pub mod event;
pub mod github;
pub mod references;
pub mod runner;
pub mod status_updates;
pub mod summary;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

pub use clickup::{ClickUpClient, ClickUpComment, ClickUpError, ClickUpTask, TaskService};
pub use comments::{add_back_link_comments, CommentStatus, TaskComment};
pub use config::{ActionInputs, ConfigError, FeatureFlag};
pub use description::{reconcile_description, DescriptionError, DescriptionStatus, LinkSection};
pub use event::{load_pull_request_context, parse_pull_request_context, EventError, PullRequestContext};
pub use github::{GitHubError, GitHubPullRequests, PullRequestHost};
pub use references::{extract_references, TaskReference};
pub use runner::{RunOutcome, Runner, RunnerConfig, RunnerError};
pub use status_updates::{update_task_statuses, StatusUpdateResult};
pub use summary::{Phase, PhaseFailure, RunSummary};
pub use templates::{contains_link, pull_request_url, task_url, TemplateError, TemplateRenderer};
