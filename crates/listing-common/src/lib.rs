//! Shared utilities for the listing preprocessing crates.
//!
//! This crate provides Polars helpers used by ingestion, the transformation
//! stages, and the CLI invariant checks.

pub mod polars;

pub use polars::{
    any_to_label, format_numeric, missing_percent, non_numeric_columns, parse_f64, parse_i64,
    total_null_count,
};
