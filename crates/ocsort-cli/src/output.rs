//! # Report Rendering
//!
//! Turns an [`ocsort_core::Report`] into stdout lines, either as plain text
//! in scan order or as a single JSON document.

use anyhow::{Context, Result};
use clap::ValueEnum;

use ocsort_core::{Event, Report};

/// Output format for the check report.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per section and per violation.
    #[default]
    Text,
    /// The full report as pretty-printed JSON.
    Json,
}

/// Render the report as text lines, in scan order.
pub fn text_lines(report: &Report) -> Vec<String> {
    report
        .events
        .iter()
        .map(|event| match event {
            Event::Section(section) => format!("Checking schema {}", section.name),
            Event::Violation(v) => format!("Error: {} precedes {}", v.previous, v.key),
        })
        .collect()
}

/// Render the report in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = text_lines(report).join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(report).context("failed to serialize report")?;
            out.push('\n');
            Ok(out)
        }
    }
}
