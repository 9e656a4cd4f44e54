//! ClickUp task reference extraction.
//!
//! References are written in pull request titles as bracketed tokens,
//! e.g. `Fix login redirect [86b1x2k9]`. A title may carry any number of them.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Bracketed ASCII alphanumeric token, e.g. `[AB12]`.
static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z0-9]+)\]").expect("reference pattern is valid"));

/// A ClickUp task identifier extracted from a pull request title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskReference(String);

impl TaskReference {
    /// Creates a reference from an already extracted identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent to the ClickUp API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extracts every task reference from a title, in order of appearance.
///
/// Duplicates are kept verbatim and no case normalization is applied.
/// An empty result means there is nothing to link.
#[must_use]
pub fn extract_references(title: &str) -> Vec<TaskReference> {
    REFERENCE_PATTERN
        .captures_iter(title)
        .filter_map(|captures| captures.get(1))
        .map(|id| TaskReference::new(id.as_str()))
        .collect()
}
