//! Template rendering error types.

/// Template rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// The rendered comment would not contain the pull request URL.
    #[error("Comment template must include {{{{pull_request_url}}}}")]
    MissingPullRequestUrl,
}
