//! Command-line front end for the pole survey.
//!
//! Reads the pole count and height readings from stdin and prints
//! `<replaced> <repaired>` on a single line.
//!
//! ## Exit Codes
//!
//! - 0: Survey completed
//! - 1: Input could not be read or was malformed
//! - 2: Usage error (reported by clap)

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use poles_core::survey;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "RUST_LOG";

/// Classify utility poles by height.
///
/// Reads N followed by N integer heights (whitespace separated, any number
/// of lines) from stdin. Prints how many poles must be replaced (height
/// below 50) and how many repaired (50 up to but excluding 85).
#[derive(Debug, Parser)]
#[command(name = "poles", version)]
pub struct Cli {}

/// Runs one survey over `input` and writes the report line to `output`.
///
/// Nothing is written to `output` when the survey fails.
pub fn run<R, W>(input: R, mut output: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    let tally = survey(input).context("failed to survey pole heights")?;
    writeln!(output, "{tally}").context("failed to write report")?;
    output.flush().context("failed to write report")?;
    Ok(())
}

/// Builds the diagnostics filter from a `RUST_LOG`-style directive string.
///
/// Falls back to `warn` when no directive is given; malformed directives are
/// dropped rather than failing the survey.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Logs go to stderr so stdout carries only the report line. Colors are only
/// used when stderr is a terminal, so piped diagnostics stay plain text.
pub fn init_logging() {
    let directives = std::env::var(LOG_ENV_VAR).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
