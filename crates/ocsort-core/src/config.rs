//! # Checker Configuration
//!
//! Settings for an order check, loadable from a YAML file:
//!
//! ```yaml
//! sentinel: OC_SCHEMA
//! fail_fast: true
//! ```
//!
//! Missing fields take their defaults. Unknown fields are rejected so a
//! misspelled option does not silently fall back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;
use crate::pattern::DEFAULT_SENTINEL;

/// Configuration of an [`OrderChecker`](crate::OrderChecker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Line token that opens a new section and resets the cursor.
    pub sentinel: String,
    /// Stop at the first out-of-order key.
    pub fail_fast: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.to_string(),
            fail_fast: true,
        }
    }
}

impl CheckerConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, CheckError> {
        // An empty document deserializes as null, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| CheckError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            sentinel = %config.sentinel,
            fail_fast = config.fail_fast,
            "loaded checker configuration"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.sentinel, "OC_SCHEMA");
        assert!(config.fail_fast);
    }

    #[test]
    fn parses_full_document() {
        let config = CheckerConfig::from_yaml_str(
            "sentinel: SCHEMA_BEGIN\nfail_fast: false\n",
            Path::new("ocsort.yaml"),
        )
        .unwrap();
        assert_eq!(config.sentinel, "SCHEMA_BEGIN");
        assert!(!config.fail_fast);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config =
            CheckerConfig::from_yaml_str("fail_fast: false\n", Path::new("ocsort.yaml")).unwrap();
        assert_eq!(config.sentinel, "OC_SCHEMA");
        assert!(!config.fail_fast);
    }

    #[test]
    fn empty_document_is_default() {
        let config = CheckerConfig::from_yaml_str("\n", Path::new("ocsort.yaml")).unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn unknown_field_rejected() {
        let err = CheckerConfig::from_yaml_str("sentinal: X\n", Path::new("ocsort.yaml"))
            .unwrap_err();
        assert!(matches!(err, CheckError::Config { .. }));
        assert!(err.to_string().contains("ocsort.yaml"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocsort.yaml");
        std::fs::write(&path, "sentinel: MY_SCHEMA\n").unwrap();

        let config = CheckerConfig::load(&path).unwrap();
        assert_eq!(config.sentinel, "MY_SCHEMA");
        assert!(config.fail_fast);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CheckerConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CheckError::Io { .. }));
    }
}
