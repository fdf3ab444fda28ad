use std::path::PathBuf;

use metron_scansion::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{flag} requires {what}")]
    MissingValue { flag: String, what: &'static str },

    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("unexpected extra input file: {0}")]
    ExtraInput(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
