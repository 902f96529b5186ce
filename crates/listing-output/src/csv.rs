//! Processed table export.

use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::atomic::{StagedFile, stage};
use crate::error::{OutputError, Result};

/// Writes `df` to the temp sibling of `path` as comma-separated values with a
/// header row. No index column is written.
///
/// Nothing appears at `path` until the returned file is committed.
pub(crate) fn stage_csv(df: &DataFrame, path: &Path) -> Result<StagedFile> {
    let mut frame = df.clone();
    let staged = stage(path, |file, target| {
        CsvWriter::new(file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut frame)
            .map_err(|err| OutputError::Csv {
                path: target.to_path_buf(),
                message: err.to_string(),
            })
    })?;
    debug!(
        path = %staged.temp_path().display(),
        rows = df.height(),
        "staged processed listings"
    );
    Ok(staged)
}
