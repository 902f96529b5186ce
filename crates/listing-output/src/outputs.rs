//! Committing the processed table and its manifest together.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use listing_model::PipelineArtifacts;

use crate::csv::stage_csv;
use crate::error::{OutputError, Result};
use crate::manifest::stage_artifacts;

/// Writes the processed table to `csv_path` and, when given, the artifact
/// manifest to its own path.
///
/// Both files are fully written to temp siblings before either is renamed
/// into place. If the table or the manifest cannot be produced, neither
/// destination is touched and an existing file at either path is kept.
pub fn write_outputs(
    df: &DataFrame,
    csv_path: &Path,
    manifest: Option<(&PipelineArtifacts, &Path)>,
) -> Result<()> {
    if manifest.is_some_and(|(_, manifest_path)| manifest_path == csv_path) {
        return Err(OutputError::SamePath {
            path: csv_path.to_path_buf(),
        });
    }

    let csv = stage_csv(df, csv_path)?;
    let manifest = manifest
        .map(|(artifacts, path)| stage_artifacts(artifacts, path).map(|staged| (artifacts, staged)))
        .transpose()?;

    csv.commit()?;
    info!(
        path = %csv_path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote processed listings"
    );
    if let Some((artifacts, staged)) = manifest {
        let path = staged.target().to_path_buf();
        staged.commit()?;
        info!(
            path = %path.display(),
            ordinal = artifacts.ordinal.len(),
            one_hot = artifacts.one_hot.len(),
            scale = artifacts.scale.len(),
            "wrote artifact manifest"
        );
    }
    Ok(())
}
