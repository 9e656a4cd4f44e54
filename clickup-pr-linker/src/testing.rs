//! In-memory task service and pull request host for unit tests.

use crate::clickup::{ClickUpComment, ClickUpError, ClickUpTask, TaskService};
use crate::event::PullRequestContext;
use crate::github::{GitHubError, PullRequestHost};
use crate::references::TaskReference;
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub(crate) fn sample_pull_request() -> PullRequestContext {
    PullRequestContext {
        owner: "acme".to_string(),
        repo: "webapp".to_string(),
        number: 42,
        title: "Fix login [X1]".to_string(),
    }
}

fn api_error(operation: &'static str, status: u16) -> ClickUpError {
    ClickUpError::Api {
        operation,
        status: StatusCode::from_u16(status).unwrap(),
        body: r#"{"err":"injected"}"#.to_string(),
    }
}

/// Records every call as `"<operation> <task> [status]"`.
#[derive(Default)]
pub(crate) struct FakeTaskService {
    names: HashMap<String, String>,
    comments: Mutex<HashMap<String, Vec<String>>>,
    failing_status: HashSet<String>,
    failing_comment_fetch: HashSet<String>,
    failing_comment_post: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl FakeTaskService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_task(mut self, id: &str, name: &str) -> Self {
        self.names.insert(id.to_string(), name.to_string());
        self
    }

    pub(crate) fn with_comment(self, id: &str, text: &str) -> Self {
        self.comments
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_default()
            .push(text.to_string());
        self
    }

    pub(crate) fn failing_status_update(mut self, id: &str) -> Self {
        self.failing_status.insert(id.to_string());
        self
    }

    pub(crate) fn failing_comment_fetch(mut self, id: &str) -> Self {
        self.failing_comment_fetch.insert(id.to_string());
        self
    }

    pub(crate) fn failing_comment_post(mut self, id: &str, status: u16) -> Self {
        self.failing_comment_post.insert(id.to_string(), status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn comments_on(&self, id: &str) -> Vec<String> {
        self.comments
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TaskService for FakeTaskService {
    async fn update_task_status(
        &self,
        task: &TaskReference,
        status: &str,
    ) -> Result<(), ClickUpError> {
        self.record(format!("update_task_status {task} {status}"));
        if self.failing_status.contains(task.as_str()) {
            return Err(api_error("update_task_status", 500));
        }
        Ok(())
    }

    async fn get_task(&self, task: &TaskReference) -> Result<ClickUpTask, ClickUpError> {
        self.record(format!("get_task {task}"));
        match self.names.get(task.as_str()) {
            Some(name) => Ok(ClickUpTask {
                id: task.to_string(),
                name: name.clone(),
            }),
            None => Err(api_error("get_task", 404)),
        }
    }

    async fn get_task_comments(
        &self,
        task: &TaskReference,
    ) -> Result<Vec<ClickUpComment>, ClickUpError> {
        self.record(format!("get_task_comments {task}"));
        if self.failing_comment_fetch.contains(task.as_str()) {
            return Err(api_error("get_task_comments", 503));
        }
        Ok(self
            .comments_on(task.as_str())
            .into_iter()
            .map(|comment_text| ClickUpComment {
                comment_text,
                ..ClickUpComment::default()
            })
            .collect())
    }

    async fn create_task_comment(
        &self,
        task: &TaskReference,
        comment_text: &str,
    ) -> Result<(), ClickUpError> {
        self.record(format!("create_task_comment {task}"));
        if let Some(status) = self.failing_comment_post.get(task.as_str()) {
            return Err(api_error("create_task_comment", *status));
        }
        self.comments
            .lock()
            .unwrap()
            .entry(task.to_string())
            .or_default()
            .push(comment_text.to_string());
        Ok(())
    }
}

/// Holds one pull request body and counts writes to it.
pub(crate) struct FakePullRequestHost {
    body: Mutex<Option<String>>,
    fetches: Mutex<usize>,
    updates: Mutex<usize>,
    unreachable: bool,
}

impl FakePullRequestHost {
    pub(crate) fn with_body(body: Option<&str>) -> Self {
        Self {
            body: Mutex::new(body.map(str::to_string)),
            fetches: Mutex::new(0),
            updates: Mutex::new(0),
            unreachable: false,
        }
    }

    /// Every call fails.
    pub(crate) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::with_body(None)
        }
    }

    pub(crate) fn body(&self) -> Option<String> {
        self.body.lock().unwrap().clone()
    }

    pub(crate) fn fetches(&self) -> usize {
        *self.fetches.lock().unwrap()
    }

    pub(crate) fn updates(&self) -> usize {
        *self.updates.lock().unwrap()
    }

    fn error() -> GitHubError {
        // A real octocrab error without touching the network.
        let error = Octocrab::builder()
            .base_uri("not a uri")
            .err()
            .expect("invalid base URI is rejected");
        GitHubError::Api(error)
    }
}

#[async_trait]
impl PullRequestHost for FakePullRequestHost {
    async fn pull_request_body(
        &self,
        _pull_request: &PullRequestContext,
    ) -> Result<Option<String>, GitHubError> {
        *self.fetches.lock().unwrap() += 1;
        if self.unreachable {
            return Err(Self::error());
        }
        Ok(self.body())
    }

    async fn update_pull_request_body(
        &self,
        _pull_request: &PullRequestContext,
        body: &str,
    ) -> Result<(), GitHubError> {
        if self.unreachable {
            return Err(Self::error());
        }
        *self.updates.lock().unwrap() += 1;
        *self.body.lock().unwrap() = Some(body.to_string());
        Ok(())
    }
}
