//! Output error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting pipeline results.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp file could not be renamed over the destination.
    #[error("failed to move {temp_path} into place at {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest would overwrite the processed table.
    #[error("artifact manifest path is the same as the output path: {path}")]
    SamePath { path: PathBuf },

    /// Polars failed to serialize the table.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Artifact manifest could not be serialized.
    #[error("failed to serialize artifacts for {path}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
