// Errors for the fallible edges of the scansion crate.
//
// Analysis itself never fails. Only loading a `ScanConfig` or a custom
// verse-form catalog from disk/JSON can, and those paths return `ScanError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid verse form '{name}': {reason}")]
    InvalidForm { name: String, reason: String },

    #[error("verse form '{name}' appears more than once in the catalog")]
    DuplicateForm { name: String },
}

impl ScanError {
    pub(crate) fn invalid_form(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidForm {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
