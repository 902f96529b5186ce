//! JSON manifest of fitted encoders and scale factors.

use std::io::Write;
use std::path::Path;

use listing_model::PipelineArtifacts;

use crate::atomic::{StagedFile, stage};
use crate::error::{OutputError, Result};

/// Serializes `artifacts` as pretty-printed JSON into the temp sibling of
/// `path`, leaving `path` untouched until the returned file is committed.
pub(crate) fn stage_artifacts(artifacts: &PipelineArtifacts, path: &Path) -> Result<StagedFile> {
    stage(path, |file, target| {
        serde_json::to_writer_pretty(&mut *file, artifacts).map_err(|source| {
            OutputError::Serialization {
                path: target.to_path_buf(),
                source,
            }
        })?;
        file.write_all(b"\n").map_err(|source| OutputError::Io {
            operation: "write",
            path: target.to_path_buf(),
            source,
        })
    })
}
