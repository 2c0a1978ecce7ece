//! Domain-specific assertions for qnorm harnesses.
//!
//! These add context-rich failure messages that make it clear *which* record
//! and example still holds an array `output` after a pass.

use serde_json::Value;

/// Positions `(record, example)` whose `output` is still an array.
pub fn leftover_arrays(records: &[Value]) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for (r, record) in records.iter().enumerate() {
        let Some(Value::Array(examples)) = record.get("examples") else {
            continue;
        };
        for (e, example) in examples.iter().enumerate() {
            if matches!(example.get("output"), Some(Value::Array(_))) {
                found.push((r, e));
            }
        }
    }
    found
}

/// Number of `output` fields that a pass would rewrite.
pub fn array_outputs(records: &[Value]) -> usize {
    records
        .iter()
        .filter_map(|r| r.get("examples").and_then(Value::as_array))
        .flatten()
        .filter(|e| matches!(e.get("output"), Some(Value::Array(_))))
        .count()
}

/// Every non-array `output` with its position, in document order.
pub fn non_array_outputs(records: &[Value]) -> Vec<(usize, usize, Value)> {
    let mut found = Vec::new();
    for (r, record) in records.iter().enumerate() {
        let Some(Value::Array(examples)) = record.get("examples") else {
            continue;
        };
        for (e, example) in examples.iter().enumerate() {
            match example.get("output") {
                Some(Value::Array(_)) | None => {}
                Some(output) => found.push((r, e, output.clone())),
            }
        }
    }
    found
}

/// Copy of `records` with every example's `output` key removed, used to check
/// that normalization touches nothing else.
pub fn without_outputs(records: &[Value]) -> Vec<Value> {
    let mut records = records.to_vec();
    for record in &mut records {
        if let Some(Value::Array(examples)) = record.get_mut("examples") {
            for example in examples {
                if let Value::Object(map) = example {
                    map.remove("output");
                }
            }
        }
    }
    records
}

/// Assert that no example in `records` still holds an array `output`.
/// Numeric, boolean, and null outputs are passed through and do not count.
///
/// ```rust
/// assert_no_array_outputs!(doc.records());
/// ```
#[macro_export]
macro_rules! assert_no_array_outputs {
    ($records:expr) => {{
        let records: &[serde_json::Value] = &$records;
        let violations = $crate::common::leftover_arrays(records);
        if !violations.is_empty() {
            let detail: Vec<String> = violations
                .iter()
                .map(|&(r, e)| format!("  records[{r}].examples[{e}].output = {}", records[r]["examples"][e]["output"]))
                .collect();
            panic!(
                "assert_no_array_outputs! failed: {} array output(s) left\n{}",
                violations.len(),
                detail.join("\n")
            );
        }
    }};
}
