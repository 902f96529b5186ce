//! Error types for table transformations.

use thiserror::Error;

/// Errors raised by the transformation stages.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Column count differs from the rename target.
    #[error("schema mismatch: expected {expected} columns, found {found}")]
    SchemaMismatch { expected: usize, found: usize },

    /// Column required by a stage is absent.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Ordinal encoding applied to a column that does not hold labels.
    #[error("column '{column}' is not categorical (dtype {dtype}); it may already be encoded")]
    NotCategorical { column: String, dtype: String },

    /// Scaling applied to a non-numeric column.
    #[error("column '{column}' is not numeric (dtype {dtype})")]
    NotNumeric { column: String, dtype: String },

    /// A generated column would overwrite an existing one.
    #[error("generated column '{column}' already exists")]
    DuplicateColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
