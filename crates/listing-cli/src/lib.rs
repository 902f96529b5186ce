//! Library components of the `listing-prep` command.

pub mod logging;
pub mod pipeline;
pub mod types;
