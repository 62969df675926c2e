//! # ocsort-core — Sorted-Key Checking for Schema Sources
//!
//! Verifies that schema definition sources such as
//! `Library/OcConfigurationLib/OcConfigurationLib.c` keep their entries in
//! ascending lexicographic order, which the runtime relies on for binary
//! search over schema keys.
//!
//! A schema source is split into sections by a sentinel line (`OC_SCHEMA`).
//! The line after the sentinel names the section. Within a section, the
//! first double-quoted string on each line is its key, and keys must be
//! non-decreasing.
//!
//! ```
//! use ocsort_core::{CheckerConfig, OrderChecker};
//!
//! let checker = OrderChecker::new(&CheckerConfig::default()).unwrap();
//! let report = checker
//!     .check_str("OC_SCHEMA\nmSchema[] = {\n\"Alpha\",\n\"Beta\",\n")
//!     .unwrap();
//! assert!(report.is_sorted());
//! ```
//!
//! ## Crate Policy
//!
//! - Out-of-order keys are report data, never errors.
//! - Errors are reserved for unreadable input, malformed sections and
//!   unusable configuration.

pub mod checker;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;

pub use checker::{Cursor, OrderChecker, OutOfOrder};
pub use config::CheckerConfig;
pub use error::CheckError;
pub use pattern::{LinePatterns, DEFAULT_SENTINEL};
pub use report::{Event, Report, Section, Violation};
