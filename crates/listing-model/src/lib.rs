//! Data model for the listing preprocessing pipeline.
//!
//! - **schema**: the fixed positional schema of the raw listings file
//! - **options**: stage configuration with the listing defaults
//! - **artifacts**: fitted encoders and scale factors
//! - **report**: cleaning diagnostics

pub mod artifacts;
pub mod options;
pub mod report;
pub mod schema;

pub use artifacts::{
    OneHotEncoding, OrdinalEncoding, PipelineArtifacts, ScaleFactor, round_to,
};
pub use options::{
    CleanOptions, DEPARTMENT_PREFIX, EncodeOptions, ProcessingOptions, SCALE_SUFFIX,
    SchemaPolicy,
};
pub use report::{CleaningReport, FillCount, MissingShare};
pub use schema::{FieldKind, ListingField, listing_column_names};
