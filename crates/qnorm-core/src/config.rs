//! Configuration types for qnorm.
//!
//! [`Config::load`] layers an optional `qnorm.toml` from the working
//! directory (or an explicit file) on top of the built-in defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::document::OutputStyle;
use crate::normalizer::Normalizer;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[document]
path = "Questions.json"

[normalize]
separator = ", "

[output]
indent           = 2
trailing_newline = false
"#;

/// File picked up from the working directory when no `--config` is given.
pub const LOCAL_CONFIG_FILE: &str = "qnorm.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[document]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf { PathBuf::from("Questions.json") }

impl Default for DocumentConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}

/// `[normalize]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String { crate::normalizer::DEFAULT_SEPARATOR.to_string() }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { separator: default_separator() }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub trailing_newline: bool,
}

fn default_indent() -> usize { 2 }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            trailing_newline: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults overlaid with `explicit` (which must exist)
    /// or, failing that, `qnorm.toml` in the working directory if present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_in(Path::new(""), explicit)
    }

    /// Like [`Config::load`], but looks for `qnorm.toml` in `dir` instead of
    /// the working directory.
    pub fn load_in(dir: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(dir.join(LOCAL_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.normalize.separator.clone())
    }

    pub fn output_style(&self) -> OutputStyle {
        OutputStyle {
            indent: self.output.indent,
            trailing_newline: self.output.trailing_newline,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
