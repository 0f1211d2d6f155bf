//! Preference storage errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt preferences file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Preference write did not complete: {0}")]
    WriteAborted(String),
}
