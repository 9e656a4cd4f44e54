//! Action inputs and their validation.
//!
//! Inputs arrive as plain strings, exactly as GitHub Actions hands them to
//! the process. This module turns them into typed settings.

mod error;
mod flag;

pub use error::ConfigError;
pub use flag::FeatureFlag;

use url::Url;

/// Default base URL of the ClickUp REST API v2.
pub const DEFAULT_CLICKUP_API_URL: &str = "https://api.clickup.com/api/v2";

/// Default base URL of the GitHub REST API.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Raw, string-valued inputs of a single run.
#[derive(Debug, Clone)]
pub struct ActionInputs {
    /// Credential for GitHub API calls.
    pub github_token: String,
    /// Credential for ClickUp API calls.
    pub clickup_api_key: String,
    /// Status applied to every referenced task.
    pub new_clickup_status: String,
    /// `yes` enables the pull request description update.
    pub should_update_pr_description: String,
    /// `yes` enables back-link comments on tasks.
    pub should_add_task_comment: String,
    /// Optional Handlebars template for back-link comments.
    pub clickup_comment_template: Option<String>,
    /// Base URL of the ClickUp API.
    pub clickup_api_url: String,
    /// Base URL of the GitHub API.
    pub github_api_url: String,
}

impl ActionInputs {
    /// Creates inputs with the required values and defaults for the rest.
    ///
    /// Both optional features start disabled.
    pub fn new(
        github_token: impl Into<String>,
        clickup_api_key: impl Into<String>,
        new_clickup_status: impl Into<String>,
    ) -> Self {
        Self {
            github_token: github_token.into(),
            clickup_api_key: clickup_api_key.into(),
            new_clickup_status: new_clickup_status.into(),
            should_update_pr_description: String::new(),
            should_add_task_comment: String::new(),
            clickup_comment_template: None,
            clickup_api_url: DEFAULT_CLICKUP_API_URL.to_string(),
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
        }
    }
}

/// Returns the input trimmed, or an error if nothing is left.
pub(crate) fn require(name: &'static str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingInput { name });
    }
    Ok(value.to_string())
}

/// Parses an API base URL input.
pub(crate) fn parse_base_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
        name,
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            name,
            message: format!("'{url}' cannot be used as a base URL"),
        });
    }

    Ok(url)
}
