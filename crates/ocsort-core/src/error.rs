//! # Error Types
//!
//! Operational failures of an order check. An out-of-order key is not an
//! error: it is recorded in the [`Report`](crate::Report) and mapped to an
//! exit status by the caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::report::Report;

/// Error raised while configuring or running an order check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The schema source could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A sentinel line is not followed by a line starting with an identifier.
    #[error("sentinel on line {line} is not followed by a section name")]
    MissingSectionName {
        /// 1-based line number of the sentinel.
        line: usize,
        /// Events found before the malformed sentinel.
        partial: Box<Report>,
    },

    /// A line pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The checker configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be parsed.
    #[error("failed to parse config '{}': {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// YAML decoding failure.
        #[source]
        source: serde_yaml::Error,
    },
}

impl CheckError {
    /// Report built before the scan was cut short, if any.
    pub fn partial_report(&self) -> Option<&Report> {
        match self {
            Self::MissingSectionName { partial, .. } => Some(&**partial),
            _ => None,
        }
    }
}
