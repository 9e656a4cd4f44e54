//! Template renderer.

use super::{contains_link, pull_request_url, TemplateError, TASK_LINK_TEMPLATE};
use crate::event::PullRequestContext;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown and plain-text output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Task names go into markdown verbatim
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs
}

/// Renders description bullet lines and back-link comments.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the markdown bullet line linking one task.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_task_link(&self, name: &str, url: &str) -> Result<String, TemplateError> {
        self.render_template(TASK_LINK_TEMPLATE, &json!({ "name": name, "url": url }))
    }

    /// Renders the back-link comment for a pull request.
    ///
    /// Available variables: `pull_request_url`, `pull_request_title`,
    /// `pull_request_number` and `repository`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the output doesn't contain the
    /// pull request URL, which duplicate detection relies on.
    pub fn render_comment(
        &self,
        template: &str,
        pull_request: &PullRequestContext,
    ) -> Result<String, TemplateError> {
        let url = pull_request_url(pull_request);
        let data = json!({
            "pull_request_url": url,
            "pull_request_title": pull_request.title,
            "pull_request_number": pull_request.number,
            "repository": pull_request.full_name(),
        });

        let comment = self.render_template(template, &data)?;
        if !contains_link(&comment, &url) {
            return Err(TemplateError::MissingPullRequestUrl);
        }
        Ok(comment)
    }

    /// Checks that a comment template renders and carries the pull request URL.
    ///
    /// # Errors
    ///
    /// Returns the error [`render_comment`](Self::render_comment) would produce.
    pub fn validate_comment_template(&self, template: &str) -> Result<(), TemplateError> {
        let sample = PullRequestContext {
            owner: "owner".to_string(),
            repo: "repo".to_string(),
            number: 1,
            title: "Sample title".to_string(),
        };
        self.render_comment(template, &sample).map(|_| ())
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
