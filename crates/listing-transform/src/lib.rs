//! Listing table transformations.
//!
//! Each stage takes a `DataFrame` by reference and returns a new frame plus
//! whatever it learned or observed:
//!
//! - **rename**: bind positional columns to the listing schema
//! - **clean**: deduplicate, drop non-predictive columns, remediate nulls
//! - **encode**: ordinal and one-hot encoding of categorical columns
//! - **scale**: divide numeric columns by their standard deviation

pub mod clean;
pub mod encode;
pub mod error;
pub mod rename;
pub mod scale;

pub use clean::{Cleaned, clean};
pub use encode::{one_hot_encode, ordinal_encode};
pub use error::{Result, TransformError};
pub use rename::{Renamed, rename_columns, rename_to_listing_schema};
pub use scale::scale_column;
