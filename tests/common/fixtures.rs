//! Static question documents used across harnesses.
//!
//! Shapes mirror the question bank: `id`, `title`, prose fields, and an
//! `examples` list whose `output` is sometimes an array left over from an
//! older export.

/// A small bank with one array output, one string output, and one record
/// without examples. Normalizing it fixes exactly one field.
pub const BANK_SMALL: &str = r#"[
  {"id": 1, "title": "Two Sum", "difficulty": "easy", "examples": [{"input": "nums = [2,7,11,15], target = 9", "output": [0, 1]}]},
  {"id": 2, "title": "Add Two Numbers", "examples": [{"input": "l1 = [2,4,3], l2 = [5,6,4]", "output": "[7,0,8]"}]},
  {"id": 3, "title": "Longest Substring"}
]"#;

/// Non-ASCII titles and outputs, plus several array outputs in one record.
pub const BANK_UNICODE: &str = r#"[
  {"id": 10, "title": "两数之和", "description": "给定一个整数数组", "examples": [
    {"input": "nums = [3,2,4]", "output": [1, 2], "explanation": "因为 nums[1] + nums[2] == 6"},
    {"input": "nums = [3,3]", "output": ["零", "一"]}
  ]},
  {"id": 11, "title": "Café ☕", "examples": []}
]"#;

/// Already normalized: nothing to fix.
pub const BANK_CLEAN: &str = r#"[
  {"id": 1, "title": "Two Sum", "examples": [{"output": "0, 1"}]},
  {"id": 2, "title": "No Examples"}
]"#;

/// Oddly shaped but valid records that must pass through untouched.
pub const BANK_ODD_SHAPES: &str = r#"[
  {"id": 1, "title": "Examples object", "examples": {"output": [1, 2]}},
  {"id": 2, "title": "Scalar examples", "examples": ["output", 3, null]},
  {"id": 3, "title": "Numeric output", "examples": [{"output": 42}]},
  {"title": "No id", "examples": [{"output": [true, null]}]}
]"#;
