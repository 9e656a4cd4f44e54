//! HTTP client for the ClickUp REST API v2.

use super::models::{
    ClickUpComment, ClickUpCommentRequest, ClickUpCommentsResponse, ClickUpStatusRequest,
    ClickUpTask, COMMENT_PAGE_SIZE,
};
use super::{ClickUpError, TaskService};
use crate::references::TaskReference;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::fmt;
use tracing::debug;
use url::Url;

/// ClickUp API client authenticated with a personal API token.
#[derive(Clone)]
pub struct ClickUpClient {
    /// The underlying HTTP client.
    http: Client,
    /// ClickUp personal API token.
    api_key: String,
    /// API root, e.g. `https://api.clickup.com/api/v2`.
    base_url: Url,
}

impl ClickUpClient {
    /// Creates a client for the API root, e.g. `https://api.clickup.com/api/v2`.
    ///
    /// # Errors
    ///
    /// Returns [`ClickUpError`] if the URL can't carry paths or the HTTP
    /// client can't be built.
    pub fn with_base_url(api_key: impl Into<String>, base_url: Url) -> Result<Self, ClickUpError> {
        if base_url.cannot_be_a_base() {
            return Err(ClickUpError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        let http = Client::builder().build().map_err(ClickUpError::Client)?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url,
        })
    }

    /// Builds `{base}/task/{id}` plus any trailing segments.
    fn task_url(&self, task: &TaskReference, trailing: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("task")
                .push(task.as_str())
                .extend(trailing);
        }
        url
    }

    /// Builds an authorized JSON request.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
    }

    /// Sends a request, turning transport errors and non-success statuses into errors.
    async fn send(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<Response, ClickUpError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClickUpError::Request { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClickUpError::Api {
                operation,
                status,
                body,
            });
        }

        Ok(response)
    }
}

impl fmt::Debug for ClickUpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickUpClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TaskService for ClickUpClient {
    async fn update_task_status(
        &self,
        task: &TaskReference,
        status: &str,
    ) -> Result<(), ClickUpError> {
        debug!(task_id = %task, status, "PUT task status");
        let request = self
            .request(Method::PUT, self.task_url(task, &[]))
            .json(&ClickUpStatusRequest { status });
        self.send(request, "update_task_status").await?;
        Ok(())
    }

    async fn get_task(&self, task: &TaskReference) -> Result<ClickUpTask, ClickUpError> {
        debug!(task_id = %task, "GET task");
        let request = self.request(Method::GET, self.task_url(task, &[]));
        self.send(request, "get_task")
            .await?
            .json::<ClickUpTask>()
            .await
            .map_err(|source| ClickUpError::Request {
                operation: "get_task",
                source,
            })
    }

    async fn get_task_comments(
        &self,
        task: &TaskReference,
    ) -> Result<Vec<ClickUpComment>, ClickUpError> {
        let mut comments = Vec::new();
        let mut cursor: Option<(String, String)> = None;

        loop {
            debug!(task_id = %task, fetched = comments.len(), "GET task comments");
            let mut url = self.task_url(task, &["comment"]);
            if let Some((start, start_id)) = &cursor {
                url.query_pairs_mut()
                    .append_pair("start", start)
                    .append_pair("start_id", start_id);
            }

            let page = self
                .send(self.request(Method::GET, url), "get_task_comments")
                .await?
                .json::<ClickUpCommentsResponse>()
                .await
                .map_err(|source| ClickUpError::Request {
                    operation: "get_task_comments",
                    source,
                })?
                .comments;

            // Pages run newest to oldest; the last comment starts the next page.
            let next = page
                .last()
                .and_then(ClickUpComment::page_cursor)
                .filter(|next| {
                    page.len() >= COMMENT_PAGE_SIZE && cursor.as_ref() != Some(next)
                });
            comments.extend(page);

            match next {
                Some(next) => cursor = Some(next),
                None => return Ok(comments),
            }
        }
    }

    async fn create_task_comment(
        &self,
        task: &TaskReference,
        comment_text: &str,
    ) -> Result<(), ClickUpError> {
        debug!(task_id = %task, "POST task comment");
        let request = self
            .request(Method::POST, self.task_url(task, &["comment"]))
            .json(&ClickUpCommentRequest { comment_text });
        self.send(request, "create_task_comment").await?;
        Ok(())
    }
}
