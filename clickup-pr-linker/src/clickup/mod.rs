//! ClickUp task service.
//!
//! [`TaskService`] is the set of task operations a run needs. The production
//! implementation is [`ClickUpClient`], which talks to the ClickUp REST API v2.

mod client;
mod error;
mod models;

pub use client::ClickUpClient;
pub use error::ClickUpError;
pub use models::{ClickUpComment, ClickUpCommentsResponse, ClickUpTask, COMMENT_PAGE_SIZE};

use crate::references::TaskReference;
use async_trait::async_trait;

/// Task operations used while linking a pull request.
///
/// Every call is a single attempt. Callers decide how failures are isolated.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Sets the status of a task, overwriting whatever it was.
    async fn update_task_status(
        &self,
        task: &TaskReference,
        status: &str,
    ) -> Result<(), ClickUpError>;

    /// Fetches a task's details.
    async fn get_task(&self, task: &TaskReference) -> Result<ClickUpTask, ClickUpError>;

    /// Lists every comment on a task, following pagination.
    async fn get_task_comments(
        &self,
        task: &TaskReference,
    ) -> Result<Vec<ClickUpComment>, ClickUpError>;

    /// Posts a new comment on a task.
    async fn create_task_comment(
        &self,
        task: &TaskReference,
        comment_text: &str,
    ) -> Result<(), ClickUpError>;
}
