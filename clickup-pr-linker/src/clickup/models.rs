//! ClickUp API request and response models.
//!
//! These map to the ClickUp REST API v2 JSON payloads. Only the fields this
//! action reads are declared; everything else in a response is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Comments returned per page by `GET /task/{id}/comment`.
pub const COMMENT_PAGE_SIZE: usize = 25;

/// A task returned by `GET /task/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickUpTask {
    /// Unique task identifier.
    pub id: String,
    /// Task display name.
    pub name: String,
}

/// A comment returned by `GET /task/{id}/comment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClickUpComment {
    /// Comment identifier, used as the `start_id` cursor.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// Plain-text rendering of the comment.
    #[serde(default)]
    pub comment_text: String,
    /// Creation time in Unix milliseconds, used as the `start` cursor.
    #[serde(default, deserialize_with = "string_or_number")]
    pub date: Option<String>,
}

impl ClickUpComment {
    /// Returns the `(start, start_id)` cursor for the page after this comment.
    #[must_use]
    pub fn page_cursor(&self) -> Option<(String, String)> {
        Some((self.date.clone()?, self.id.clone()?))
    }
}

/// Response wrapper for the task comments endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClickUpCommentsResponse {
    /// Comments on the task, newest first.
    #[serde(default)]
    pub comments: Vec<ClickUpComment>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

/// ClickUp sends comment ids and dates as strings, older payloads as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

/// Request body for `PUT /task/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ClickUpStatusRequest<'a> {
    /// New status name.
    pub status: &'a str,
}

/// Request body for `POST /task/{id}/comment`.
#[derive(Debug, Clone, Serialize)]
pub struct ClickUpCommentRequest<'a> {
    /// Plain-text comment body.
    pub comment_text: &'a str,
}
