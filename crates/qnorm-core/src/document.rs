//! Document — a question file held fully in memory.
//!
//! [`Document::load`] reads and validates the file in one go; nothing is
//! written until [`Document::save`], which renders the complete output to a
//! buffer before touching the destination.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};

/// How a document is rendered back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Append `\n` after the closing bracket.
    pub trailing_newline: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: false,
        }
    }
}

/// A loaded question file: the source path and its top-level records.
///
/// Every record is guaranteed to be a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    records: Vec<Value>,
}

impl Document {
    /// Read and parse the question file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => Error::Malformed {
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".to_string(),
            },
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let doc = Self::parse(path, &text)?;
        info!(path = %path.display(), records = doc.len(), "loaded question file");
        Ok(doc)
    }

    /// Parse question file contents. `path` is remembered as the save target
    /// and used in error messages.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(source) => return Err(Error::Parse { path, source }),
        };

        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(Error::Malformed {
                    path,
                    reason: format!("top-level value is {}, expected an array", kind(&other)),
                })
            }
        };

        if let Some((i, record)) = records.iter().enumerate().find(|(_, r)| !r.is_object()) {
            return Err(Error::Malformed {
                path,
                reason: format!("record {i} is {}, expected an object", kind(record)),
            });
        }

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Value] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the records as pretty-printed JSON. Non-ASCII text is written
    /// literally; key order is the order read from disk.
    pub fn render(&self, style: &OutputStyle) -> Result<Vec<u8>> {
        let indent = vec![b' '; style.indent];
        let mut buf = Vec::new();
        {
            let formatter = PrettyFormatter::with_indent(&indent);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.records.serialize(&mut ser).map_err(Error::Encode)?;
        }
        if style.trailing_newline {
            buf.push(b'\n');
        }
        Ok(buf)
    }

    /// Overwrite the source file with the rendered document.
    pub fn save(&self, style: &OutputStyle) -> Result<()> {
        let bytes = self.render(style)?;
        std::fs::write(&self.path, &bytes).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), bytes = bytes.len(), "wrote question file");
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
