use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use qnorm::app::{self, Overrides, Settings};
use qnorm::config::Config;

#[derive(Parser)]
#[command(
    name = "qnorm",
    version,
    about = "Join array-valued example outputs in a question bank into strings"
)]
struct Cli {
    /// Question file to rewrite. Defaults to `[document] path` from the
    /// config, which is `Questions.json`.
    path: Option<PathBuf>,

    /// Report what would change without writing. Exits 1 if any output
    /// field still needs fixing.
    #[arg(long)]
    check: bool,

    /// Separator placed between joined output elements.
    #[arg(long)]
    separator: Option<String>,

    /// Config file to use instead of ./qnorm.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(
        &config,
        Overrides {
            path: cli.path,
            separator: cli.separator,
            check: cli.check,
        },
    );

    let report = app::run(&settings, &mut std::io::stdout().lock())?;
    Ok(ExitCode::from(app::exit_status(settings.mode, &report)))
}
