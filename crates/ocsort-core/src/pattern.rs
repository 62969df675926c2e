//! # Line Patterns
//!
//! Recognizes the two tokens a schema source carries for ordering purposes:
//! the sentinel line that opens a section, and the first double-quoted key
//! on a line.

use regex::Regex;

use crate::error::CheckError;

/// Sentinel that opens a schema section in `OcConfigurationLib.c`.
pub const DEFAULT_SENTINEL: &str = "OC_SCHEMA";

/// First non-empty double-quoted substring, leftmost match.
const KEY_PATTERN: &str = r#""([^"]+)""#;

/// Leading run of word characters.
const SECTION_NAME_PATTERN: &str = r"^\w+";

/// Compiled line patterns for one sentinel token.
#[derive(Debug, Clone)]
pub struct LinePatterns {
    sentinel: String,
    key: Regex,
    section_name: Regex,
}

impl LinePatterns {
    /// Compile the patterns for the given sentinel token.
    pub fn new(sentinel: impl Into<String>) -> Result<Self, CheckError> {
        // Lines are compared after trimming, so the token must be too.
        let sentinel = sentinel.into().trim().to_string();
        if sentinel.is_empty() {
            return Err(CheckError::InvalidConfig(
                "sentinel must not be empty".to_string(),
            ));
        }
        Ok(Self {
            sentinel,
            key: Regex::new(KEY_PATTERN)?,
            section_name: Regex::new(SECTION_NAME_PATTERN)?,
        })
    }

    /// The sentinel token these patterns were built for.
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    /// Whether a trimmed line is exactly the sentinel.
    pub fn is_sentinel(&self, line: &str) -> bool {
        line == self.sentinel
    }

    /// Extract the sortable key of a line, if it has one.
    pub fn extract_key<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.key
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Identifier at the start of a line, used to name a section.
    pub fn section_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.section_name.find(line).map(|m| m.as_str())
    }
}
