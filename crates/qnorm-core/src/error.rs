//! Error taxonomy for loading, transforming, and persisting question files.

use std::path::PathBuf;

/// Failures of a normalization pass. None of them are recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("question file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file is valid JSON but not a list of question objects.
    #[error("{} is not a question list: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("failed to encode question document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
