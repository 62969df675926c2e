//! # Check Report
//!
//! The ordered record of what a scan found: the sections it entered and the
//! out-of-order keys it detected, in file order.

use std::path::PathBuf;

use serde::Serialize;

/// A schema section opened by a sentinel line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Identifier on the line following the sentinel.
    pub name: String,
    /// 1-based line number of the sentinel.
    pub line: usize,
}

/// A key that sorts strictly before the key preceding it in its section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based line number of the offending key.
    pub line: usize,
    /// Key held by the cursor when the violation was found.
    pub previous: String,
    /// The offending key.
    pub key: String,
    /// Enclosing section, if a sentinel has been seen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// One entry of a [`Report`], in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Section(Section),
    Violation(Violation),
}

/// Result of scanning one schema source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Source that was scanned, when it came from a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Number of lines processed. Stops short of the file length on a
    /// fail-fast violation.
    pub lines: usize,
    /// Number of lines that carried a key.
    pub keys: usize,
    /// Sections and violations in the order they were met.
    pub events: Vec<Event>,
}

impl Report {
    /// Whether every section was found sorted.
    pub fn is_sorted(&self) -> bool {
        self.violations().next().is_none()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.events.iter().filter_map(|e| match e {
            Event::Section(s) => Some(s),
            Event::Violation(_) => None,
        })
    }

    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.events.iter().filter_map(|e| match e {
            Event::Violation(v) => Some(v),
            Event::Section(_) => None,
        })
    }
}
