//! # Check Command
//!
//! Scans one schema source and reports sections and out-of-order keys.
//! Command-line flags override values from the `--config` file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ocsort_core::{CheckerConfig, OrderChecker, Report};

use crate::output::{render, OutputFormat};
use crate::{EXIT_SORTED, EXIT_UNSORTED, EXIT_USAGE};

/// Arguments for checking a schema source.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema source to check (e.g. Library/OcConfigurationLib/OcConfigurationLib.c).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Line token that opens a schema section [default: OC_SCHEMA].
    #[arg(long, value_name = "TOKEN")]
    pub sentinel: Option<String>,

    /// Report every out-of-order key instead of stopping at the first.
    #[arg(long)]
    pub keep_going: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Merge the configuration file (if any) with command-line overrides.
pub fn resolve_config(args: &CheckArgs, config_path: Option<&Path>) -> Result<CheckerConfig> {
    let mut config = match config_path {
        Some(path) => CheckerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CheckerConfig::default(),
    };
    if let Some(sentinel) = &args.sentinel {
        config.sentinel = sentinel.clone();
    }
    if args.keep_going {
        config.fail_fast = false;
    }
    Ok(config)
}

/// Execute the check.
///
/// Returns exit code: 0 when sorted, 1 on an out-of-order key, 255 when no
/// path was given. Operational failures are returned as errors.
pub fn run_check(args: &CheckArgs, config_path: Option<&Path>) -> Result<u8> {
    let Some(path) = args.path.as_deref() else {
        println!("Usage: ocsort [OPTIONS] <PATH>");
        println!("Pass a schema source file to check.");
        return Ok(EXIT_USAGE);
    };

    let config = resolve_config(args, config_path)?;
    let checker = OrderChecker::new(&config).context("failed to build order checker")?;

    tracing::info!(
        path = %path.display(),
        sentinel = checker.patterns().sentinel(),
        fail_fast = config.fail_fast,
        "checking schema source"
    );

    let result = checker.check_file(path);
    // A malformed source still prints what was found before the bad sentinel.
    if let Some(partial) = result.as_ref().err().and_then(|e| e.partial_report()) {
        emit(partial, args.format)?;
    }
    let report = result.with_context(|| format!("failed to check {}", path.display()))?;

    emit(&report, args.format)?;

    for v in report.violations() {
        tracing::debug!(line = v.line, previous = %v.previous, key = %v.key, "violation");
    }
    tracing::info!(
        lines = report.lines,
        keys = report.keys,
        sections = report.sections().count(),
        sorted = report.is_sorted(),
        "check finished"
    );

    Ok(exit_code(&report))
}

/// Map a finished report to its exit code.
pub fn exit_code(report: &Report) -> u8 {
    if report.is_sorted() {
        EXIT_SORTED
    } else {
        EXIT_UNSORTED
    }
}

fn emit(report: &Report, format: OutputFormat) -> Result<()> {
    let rendered = render(report, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report")
}
