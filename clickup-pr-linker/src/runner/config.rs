//! Runner configuration.

use crate::config::{parse_base_url, require, ActionInputs, ConfigError, FeatureFlag};
use crate::event::PullRequestContext;
use crate::templates::{TemplateRenderer, DEFAULT_COMMENT_TEMPLATE};
use std::fmt;
use url::Url;

/// Validated configuration for a single run.
#[derive(Clone)]
pub struct RunnerConfig {
    /// GitHub token used for pull request calls.
    github_token: String,
    /// ClickUp API key used for task calls.
    clickup_api_key: String,
    /// Status applied to every referenced task.
    new_status: String,
    /// Whether the pull request description gets a linked tasks section.
    update_description: FeatureFlag,
    /// Whether referenced tasks get a back-link comment.
    add_task_comment: FeatureFlag,
    /// Handlebars template for back-link comments.
    comment_template: String,
    /// ClickUp API root.
    clickup_api_url: Url,
    /// GitHub API root.
    github_api_url: Url,
    /// The pull request being linked.
    pull_request: PullRequestContext,
}

impl RunnerConfig {
    /// Validates the action inputs for a pull request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required input is blank, an API URL is
    /// unusable, or the comment template wouldn't include the pull request URL.
    pub fn new(
        inputs: ActionInputs,
        pull_request: PullRequestContext,
    ) -> Result<Self, ConfigError> {
        let github_token = require("github_token", &inputs.github_token)?;
        let clickup_api_key = require("clickup_api_key", &inputs.clickup_api_key)?;
        let new_status = require("new_clickup_status", &inputs.new_clickup_status)?;
        let clickup_api_url = parse_base_url("clickup_api_url", &inputs.clickup_api_url)?;
        let github_api_url = parse_base_url("github_api_url", &inputs.github_api_url)?;

        let comment_template = inputs
            .clickup_comment_template
            .filter(|template| !template.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMENT_TEMPLATE.to_string());
        TemplateRenderer::new()
            .validate_comment_template(&comment_template)
            .map_err(|e| ConfigError::InvalidTemplate {
                message: e.to_string(),
            })?;

        Ok(Self {
            github_token,
            clickup_api_key,
            new_status,
            update_description: FeatureFlag::from_input(&inputs.should_update_pr_description),
            add_task_comment: FeatureFlag::from_input(&inputs.should_add_task_comment),
            comment_template,
            clickup_api_url,
            github_api_url,
            pull_request,
        })
    }

    /// Returns the configured GitHub token.
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the configured ClickUp API key.
    pub fn clickup_api_key(&self) -> &str {
        &self.clickup_api_key
    }

    /// Returns the status applied to every referenced task.
    pub fn new_status(&self) -> &str {
        &self.new_status
    }

    /// Returns whether the description update is enabled.
    pub fn update_description(&self) -> FeatureFlag {
        self.update_description
    }

    /// Returns whether back-link comments are enabled.
    pub fn add_task_comment(&self) -> FeatureFlag {
        self.add_task_comment
    }

    /// Returns the back-link comment template.
    pub fn comment_template(&self) -> &str {
        &self.comment_template
    }

    /// Returns the ClickUp API root.
    pub fn clickup_api_url(&self) -> &Url {
        &self.clickup_api_url
    }

    /// Returns the GitHub API root.
    pub fn github_api_url(&self) -> &Url {
        &self.github_api_url
    }

    /// Returns the pull request being linked.
    pub fn pull_request(&self) -> &PullRequestContext {
        &self.pull_request
    }
}

impl fmt::Debug for RunnerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunnerConfig")
            .field("github_token", &"<redacted>")
            .field("clickup_api_key", &"<redacted>")
            .field("new_status", &self.new_status)
            .field("update_description", &self.update_description)
            .field("add_task_comment", &self.add_task_comment)
            .field("comment_template", &self.comment_template)
            .field("clickup_api_url", &self.clickup_api_url.as_str())
            .field("github_api_url", &self.github_api_url.as_str())
            .field("pull_request", &self.pull_request)
            .finish()
    }
}
