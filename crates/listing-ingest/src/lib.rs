//! Listing data ingestion.
//!
//! Reads a delimited listings export into a Polars `DataFrame`, inferring a
//! numeric or string type per column. Ragged rows are rejected rather than
//! padded.

pub mod error;
pub mod profile;
pub mod reader;

pub use error::{IngestError, Result};
pub use profile::{ColumnProfile, profile_columns};
pub use reader::{IngestOptions, read_listings, read_schema};
