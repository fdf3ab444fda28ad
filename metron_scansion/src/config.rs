// Scanner configuration.
//
// `ScanConfig` is loaded from JSON (every field optional, missing fields take
// their defaults) and resolved into a `Scanner` by `Scanner::from_config`.
// None of these settings change what a line scans as; they only control how
// batches are executed and which catalog is consulted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Batches with at least this many lines are scanned in parallel.
    pub parallel_min_lines: usize,
    /// Whether `analyze_lines` relabels hexameter + pentameter couplets.
    pub detect_distichs: bool,
    /// Optional verse-form catalog file replacing the embedded one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            parallel_min_lines: 32,
            detect_distichs: true,
            catalog_path: None,
        }
    }
}

impl ScanConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config JSON file.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let data = std::fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.parallel_min_lines, 32);
        assert!(config.detect_distichs);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ScanConfig::from_json(r#"{"detect_distichs": false}"#).unwrap();
        assert!(!config.detect_distichs);
        assert_eq!(config.parallel_min_lines, 32);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ScanConfig::from_json("{}").unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_catalog_path() {
        let config = ScanConfig::from_json(r#"{"catalog_path": "forms.json"}"#).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("forms.json")));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ScanConfig {
            parallel_min_lines: 4,
            detect_distichs: false,
            catalog_path: Some(PathBuf::from("/tmp/forms.json")),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ScanConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_wrong_type_is_error() {
        let err = ScanConfig::from_json(r#"{"parallel_min_lines": "many"}"#).unwrap_err();
        assert!(matches!(err, ScanError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScanConfig::load(Path::new("/nonexistent/metron.json")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
