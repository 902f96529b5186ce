//! Output of the listing preprocessing pipeline.
//!
//! Every writer goes through a temp file in the destination directory that is
//! renamed into place, so a failed run never leaves a partial file behind.
//! The table and its manifest are both staged before either is renamed.

mod atomic;
mod csv;
pub mod error;
mod manifest;
pub mod outputs;

pub use atomic::temp_path_for;
pub use error::{OutputError, Result};
pub use outputs::write_outputs;
