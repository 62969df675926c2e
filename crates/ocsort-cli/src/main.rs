//! # ocsort CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and runs the check.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ocsort_cli::check::{run_check, CheckArgs};
use ocsort_cli::EXIT_ERROR;

/// Check that schema definition sources keep their quoted keys sorted.
///
/// Each `OC_SCHEMA` line opens a section named by the identifier on the
/// following line. Within a section, the first double-quoted string on
/// every line must not sort before the one on the preceding keyed line.
#[derive(Parser, Debug)]
#[command(name = "ocsort", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ocsort starting");

    match run_check(&cli.check, cli.config.as_deref()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocsort_cli::output::OutputFormat;

    #[test]
    fn cli_parse_path_only() {
        let cli = Cli::try_parse_from(["ocsort", "OcConfigurationLib.c"]).unwrap();
        assert_eq!(cli.check.path, Some(PathBuf::from("OcConfigurationLib.c")));
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(cli.check.sentinel.is_none());
        assert!(!cli.check.keep_going);
        assert_eq!(cli.check.format, OutputFormat::Text);
    }

    #[test]
    fn cli_parse_without_path() {
        let cli = Cli::try_parse_from(["ocsort"]).unwrap();
        assert!(cli.check.path.is_none());
    }

    #[test]
    fn cli_parse_all_options() {
        let cli = Cli::try_parse_from([
            "ocsort",
            "-vv",
            "--config",
            "ocsort.yaml",
            "--sentinel",
            "SCHEMA_BEGIN",
            "--keep-going",
            "--format",
            "json",
            "schema.c",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("ocsort.yaml")));
        assert_eq!(cli.check.sentinel.as_deref(), Some("SCHEMA_BEGIN"));
        assert!(cli.check.keep_going);
        assert_eq!(cli.check.format, OutputFormat::Json);
        assert_eq!(cli.check.path, Some(PathBuf::from("schema.c")));
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ocsort", "--format", "xml", "schema.c"]).is_err());
    }

    #[test]
    fn cli_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["ocsort", "a.c", "b.c"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
