//! Application layer — one full normalization pass over a question file.
//!
//! [`run`] loads the document, normalizes it in memory, persists it (unless
//! in [`Mode::Check`]), and writes the operator report to the given writer.

use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use qnorm_core::config::Config;
use qnorm_core::{Document, Normalizer, OutputStyle, Report};

/// Whether a pass persists its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite the source file with the normalized document.
    #[default]
    Write,
    /// Report pending fixes without touching the file.
    Check,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub path: Option<PathBuf>,
    pub separator: Option<String>,
    pub check: bool,
}

/// Everything a pass needs, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub path: PathBuf,
    pub normalizer: Normalizer,
    pub style: OutputStyle,
    pub mode: Mode,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.document.path.clone(),
            normalizer: config.normalizer(),
            style: config.output_style(),
            mode: Mode::Write,
        }
    }

    /// Resolve settings from `config`, then apply whatever `overrides` set.
    pub fn resolve(config: &Config, overrides: Overrides) -> Self {
        let mut settings = Self::from_config(config);
        if let Some(path) = overrides.path {
            settings.path = path;
        }
        if let Some(separator) = overrides.separator {
            settings.normalizer = Normalizer::new(separator);
        }
        if overrides.check {
            settings.mode = Mode::Check;
        }
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::defaults())
    }
}

/// Run a pass and write the report lines to `out`.
///
/// In [`Mode::Write`] the file is always rewritten, even when nothing needed
/// fixing, so its formatting converges on the configured style.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> anyhow::Result<Report> {
    let mut doc = Document::load(&settings.path)?;
    let report = settings.normalizer.normalize(doc.records_mut());

    let verb = match settings.mode {
        Mode::Write => "fixed",
        Mode::Check => "would fix",
    };
    for fix in &report.fixes {
        writeln!(out, "{verb} {fix}").context("writing report")?;
    }

    if settings.mode == Mode::Write {
        doc.save(&settings.style)?;
    }
    info!(
        path = %settings.path.display(),
        total = report.total,
        fixed = report.fixed(),
        mode = ?settings.mode,
        "normalization pass finished"
    );

    write_summary(settings.mode, &report, out).context("writing report")?;
    Ok(report)
}

/// Process exit status for a finished pass: 1 when check mode found pending
/// fixes, 0 otherwise.
pub fn exit_status(mode: Mode, report: &Report) -> u8 {
    match mode {
        Mode::Check if !report.is_clean() => 1,
        _ => 0,
    }
}

fn write_summary<W: Write>(mode: Mode, report: &Report, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    match mode {
        Mode::Write => {
            writeln!(out, "normalization complete")?;
            writeln!(out, "total questions: {}", report.total)?;
            writeln!(out, "fixed output fields: {}", report.fixed())?;
        }
        Mode::Check => {
            writeln!(out, "check complete, file not modified")?;
            writeln!(out, "total questions: {}", report.total)?;
            writeln!(out, "output fields to fix: {}", report.fixed())?;
        }
    }
    Ok(())
}
