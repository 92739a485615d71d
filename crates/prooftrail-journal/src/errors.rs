use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// The backing file does not exist.
    #[error("journal not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be serialized or a line could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
