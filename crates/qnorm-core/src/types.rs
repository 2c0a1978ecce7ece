//! Core types for qnorm-core.
//!
//! A pass over a question document yields a [`Report`]: the number of
//! records seen and one [`Fix`] per `output` field that was rewritten.

use serde_json::Value;

/// Placeholder shown when a record lacks an `id` or `title`.
const MISSING: &str = "?";

/// One `examples[*].output` field that was rewritten from an array to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    /// Position of the record in the top-level list.
    pub record: usize,
    /// Position of the example inside the record's `examples` list.
    pub example: usize,
    /// The record's `id`, rendered for display.
    pub id: String,
    /// The record's `title`, rendered for display.
    pub title: String,
}

impl Fix {
    /// Build a fix for `record`, reading its `id` and `title` for display.
    pub fn for_record(record: &Value, record_index: usize, example_index: usize) -> Self {
        Self {
            record: record_index,
            example: example_index,
            id: display_field(record, "id"),
            title: display_field(record, "title"),
        }
    }
}

impl std::fmt::Display for Fix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "question {}: {}", self.id, self.title)
    }
}

/// Outcome of normalizing a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of records in the top-level list.
    pub total: usize,
    pub fixes: Vec<Fix>,
}

impl Report {
    /// Number of `output` fields rewritten.
    pub fn fixed(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_clean(&self) -> bool {
        self.fixes.is_empty()
    }
}

fn display_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
