//! Error types for listing ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a listings file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed record: wrong field count or invalid UTF-8.
    #[error("failed to parse CSV {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// File has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/raw/AB_NYC_2019.csv"),
        };
        assert_eq!(
            err.to_string(),
            "CSV file not found: /data/raw/AB_NYC_2019.csv"
        );

        let err = IngestError::Parse {
            path: PathBuf::from("listings.csv"),
            line: 3,
            message: "expected 4 fields, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse CSV listings.csv at line 3: expected 4 fields, found 3"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Prix".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
