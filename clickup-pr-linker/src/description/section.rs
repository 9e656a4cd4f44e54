//! The linked tasks section appended to pull request descriptions.

use crate::references::TaskReference;
use crate::templates::{contains_link, LINKED_TASKS_HEADER};

/// Bullet lines collected during one run, not yet written anywhere.
#[derive(Debug, Clone, Default)]
pub struct LinkSection {
    entries: Vec<(TaskReference, String)>,
}

impl LinkSection {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rendered bullet line for a reference.
    pub fn push(&mut self, reference: TaskReference, line: String) {
        self.entries.push((reference, line));
    }

    /// Returns true if no bullet lines were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a collected bullet line links `url`.
    #[must_use]
    pub fn mentions(&self, url: &str) -> bool {
        self.entries.iter().any(|(_, line)| contains_link(line, url))
    }

    /// Returns the references that got a bullet line, in order.
    #[must_use]
    pub fn references(&self) -> Vec<TaskReference> {
        self.entries.iter().map(|(r, _)| r.clone()).collect()
    }

    /// Returns `body` with this section appended after a blank line.
    ///
    /// Existing content is kept byte for byte.
    #[must_use]
    pub fn append_to(&self, body: &str) -> String {
        let mut result = format!("{body}\n\n{LINKED_TASKS_HEADER}\n");
        for (_, line) in &self.entries {
            result.push_str(line);
            result.push('\n');
        }
        result
    }
}
