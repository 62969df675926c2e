//! # Order Checker
//!
//! Single pass over a schema source. Each trimmed line is either a sentinel
//! (opens a section and resets the cursor), a line carrying a quoted key
//! (compared against the cursor), or inert.
//!
//! Within a section, keys must be non-decreasing under plain `str` ordering,
//! which for UTF-8 is code point order. Keys are never compared across a
//! sentinel.

use std::path::Path;

use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::pattern::LinePatterns;
use crate::report::{Event, Report, Section, Violation};

/// A key that sorts strictly before the cursor value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfOrder {
    /// Cursor value at the time of the comparison.
    pub previous: String,
}

/// Lower bound for the next key in the current section.
///
/// Empty at the start of the file and after every sentinel, so the first key
/// of a section always passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    previous: String,
}

impl Cursor {
    /// Accept `key` if it does not sort before the previous key.
    ///
    /// On rejection the cursor keeps its value.
    pub fn advance(&mut self, key: &str) -> Result<(), OutOfOrder> {
        if key < self.previous.as_str() {
            return Err(OutOfOrder {
                previous: self.previous.clone(),
            });
        }
        self.set(key);
        Ok(())
    }

    /// Move the cursor to `key` unconditionally.
    pub fn set(&mut self, key: &str) {
        self.previous.clear();
        self.previous.push_str(key);
    }

    pub fn reset(&mut self) {
        self.previous.clear();
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

/// Checks that quoted keys are sorted within each sentinel-delimited section.
#[derive(Debug, Clone)]
pub struct OrderChecker {
    patterns: LinePatterns,
    fail_fast: bool,
}

impl OrderChecker {
    /// Build a checker from its configuration.
    pub fn new(config: &CheckerConfig) -> Result<Self, CheckError> {
        Ok(Self {
            patterns: LinePatterns::new(config.sentinel.as_str())?,
            fail_fast: config.fail_fast,
        })
    }

    pub fn patterns(&self) -> &LinePatterns {
        &self.patterns
    }

    /// Read and scan a schema source file.
    pub fn check_file(&self, path: &Path) -> Result<Report, CheckError> {
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read schema source");

        match self.check_str(&text) {
            Ok(mut report) => {
                report.path = Some(path.to_path_buf());
                Ok(report)
            }
            Err(CheckError::MissingSectionName { line, mut partial }) => {
                partial.path = Some(path.to_path_buf());
                Err(CheckError::MissingSectionName { line, partial })
            }
            Err(e) => Err(e),
        }
    }

    /// Scan in-memory schema source text.
    ///
    /// Returns an error only when the source is malformed: a sentinel that
    /// is not followed by a line starting with an identifier. The error
    /// carries the events found up to that sentinel. Ordering violations are
    /// reported in the returned [`Report`].
    pub fn check_str(&self, text: &str) -> Result<Report, CheckError> {
        let lines: Vec<&str> = source_lines(text).map(trim_line).collect();

        let mut report = Report::default();
        let mut cursor = Cursor::default();
        let mut section: Option<String> = None;

        for (idx, line) in lines.iter().enumerate() {
            let number = idx + 1;
            report.lines = number;

            if self.patterns.is_sentinel(line) {
                let Some(name) = lines
                    .get(idx + 1)
                    .and_then(|next| self.patterns.section_name(next))
                else {
                    return Err(CheckError::MissingSectionName {
                        line: number,
                        partial: Box::new(report),
                    });
                };

                tracing::debug!(section = name, line = number, "entering section");
                report.events.push(Event::Section(Section {
                    name: name.to_string(),
                    line: number,
                }));
                section = Some(name.to_string());
                cursor.reset();
                continue;
            }

            let Some(key) = self.patterns.extract_key(line) else {
                continue;
            };
            report.keys += 1;
            tracing::trace!(key, line = number, "key");

            if let Err(OutOfOrder { previous }) = cursor.advance(key) {
                tracing::debug!(
                    line = number,
                    previous = %previous,
                    key,
                    "key out of order"
                );
                report.events.push(Event::Violation(Violation {
                    line: number,
                    previous,
                    key: key.to_string(),
                    section: section.clone(),
                }));
                if self.fail_fast {
                    break;
                }
                cursor.set(key);
            }
        }

        Ok(report)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, without a trailing empty line.
fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, tail) = match rest.find(['\r', '\n']) {
            Some(i) if rest[i..].starts_with("\r\n") => (&rest[..i], &rest[i + 2..]),
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        rest = tail;
        Some(line)
    })
}

/// Trim Unicode whitespace and the ASCII separators `\x1c`..=`\x1f`.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}
