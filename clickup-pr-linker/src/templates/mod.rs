//! Link formats and text rendering.
//!
//! Canonical URLs are what idempotency checks search for, so they are built
//! in exactly one place. Bullet lines and back-link comments are rendered
//! with Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use crate::event::PullRequestContext;
use crate::references::TaskReference;

/// Heading of the section appended to pull request descriptions.
pub const LINKED_TASKS_HEADER: &str = "### 📝 Linked ClickUp Tasks";

/// Bullet line for one task in the linked tasks section.
pub const TASK_LINK_TEMPLATE: &str = "- [{{name}}]({{url}})";

/// Back-link comment posted on tasks unless a custom template is configured.
pub const DEFAULT_COMMENT_TEMPLATE: &str =
    "🔗 Linked GitHub pull request #{{pull_request_number}}: {{pull_request_title}}\n{{pull_request_url}}";

/// Returns the canonical ClickUp URL of a task.
///
/// Format: `https://app.clickup.com/t/{reference}`
#[must_use]
pub fn task_url(reference: &TaskReference) -> String {
    format!("https://app.clickup.com/t/{reference}")
}

/// Returns the canonical GitHub URL of a pull request.
///
/// Format: `https://github.com/{owner}/{repo}/pull/{number}`
#[must_use]
pub fn pull_request_url(pull_request: &PullRequestContext) -> String {
    format!(
        "https://github.com/{}/{}/pull/{}",
        pull_request.owner, pull_request.repo, pull_request.number
    )
}

/// Returns true if `text` links to exactly `url`.
///
/// An occurrence counts only when it is followed by the end of `text` or by a
/// character that can't extend the last path segment, so `/pull/4` is not
/// found inside `/pull/42`.
#[must_use]
pub fn contains_link(text: &str, url: &str) -> bool {
    text.match_indices(url).any(|(start, matched)| {
        text[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |next| !continues_path_segment(next))
    })
}

fn continues_path_segment(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
