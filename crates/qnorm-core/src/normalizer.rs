//! Normalizer — rewrites array-valued `examples[*].output` fields as strings.
//!
//! Each element of the array is converted to text with [`element_text`] and
//! the pieces are joined with the separator (`", "` by default). Outputs that
//! are already strings, missing outputs, and records without `examples` are
//! left exactly as they were, so a second pass over normalized data is a
//! no-op.

use serde_json::Value;
use tracing::debug;

use crate::types::{Fix, Report};

/// Separator placed between joined output elements.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// In-memory transform over question records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    separator: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl Normalizer {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Join the textual form of every element with the separator.
    pub fn join(&self, items: &[Value]) -> String {
        items
            .iter()
            .map(element_text)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Rewrite a single example's `output` if it is an array.
    ///
    /// Returns `true` when the field was changed. Non-object examples are
    /// ignored.
    pub fn normalize_example(&self, example: &mut Value) -> bool {
        let Some(output) = example.get_mut("output") else {
            return false;
        };
        let Value::Array(items) = &*output else {
            return false;
        };
        let joined = self.join(items);
        *output = Value::String(joined);
        true
    }

    /// Normalize every example of one record, returning a [`Fix`] per
    /// rewritten field.
    pub fn normalize_record(&self, record: &mut Value, index: usize) -> Vec<Fix> {
        let mut changed = Vec::new();
        if let Some(Value::Array(examples)) = record.get_mut("examples") {
            for (i, example) in examples.iter_mut().enumerate() {
                if self.normalize_example(example) {
                    changed.push(i);
                }
            }
        }

        changed
            .into_iter()
            .map(|example| {
                let fix = Fix::for_record(record, index, example);
                debug!(record = index, example, id = %fix.id, "normalized output");
                fix
            })
            .collect()
    }

    /// Normalize a whole record list in place.
    pub fn normalize(&self, records: &mut [Value]) -> Report {
        let fixes = records
            .iter_mut()
            .enumerate()
            .flat_map(|(i, record)| self.normalize_record(record, i))
            .collect();

        Report {
            total: records.len(),
            fixes,
        }
    }
}

/// String form of one output element.
///
/// Strings are used verbatim, every other value is written as compact JSON
/// (`1`, `2.5`, `true`, `null`, `[1,2]`). Older Python-generated banks used
/// `True`/`None` for the same elements; JSON spelling is intentional here.
/// Numbers keep the exact text they were read with.
pub fn element_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
