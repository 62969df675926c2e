//! # ocsort-cli — Sorted-Key Checker CLI
//!
//! Provides the `ocsort` command-line interface over [`ocsort_core`]:
//!
//! ```bash
//! ocsort Library/OcConfigurationLib/OcConfigurationLib.c
//! ocsort --keep-going --format json Library/OcConfigurationLib/OcConfigurationLib.c
//! ```
//!
//! ## Exit Codes
//!
//! - `0` — every section is sorted.
//! - `1` — an out-of-order key was found.
//! - `2` — operational error (unreadable file, malformed section, bad config).
//! - `255` — no file was given.

pub mod check;
pub mod output;

/// Every section is sorted.
pub const EXIT_SORTED: u8 = 0;
/// At least one key is out of order.
pub const EXIT_UNSORTED: u8 = 1;
/// The check could not be carried out.
pub const EXIT_ERROR: u8 = 2;
/// No schema file argument was supplied.
pub const EXIT_USAGE: u8 = 255;
