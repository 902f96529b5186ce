//! Temp-file-and-rename writes.
//!
//! A write is split in two: [`stage`] fills and syncs `<path>.tmp`, and
//! [`StagedFile::commit`] renames it over `path`. Several files can be staged
//! before any of them is committed, so a failure while producing one leaves
//! every destination untouched.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// `<path>.tmp`, next to the destination.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// A fully written temp file waiting to be moved into place.
///
/// Dropping it without committing removes the temp file.
#[derive(Debug)]
pub(crate) struct StagedFile {
    temp_path: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Destination the file is renamed to on commit.
    pub(crate) fn target(&self) -> &Path {
        &self.target
    }

    pub(crate) fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Renames the temp file over the destination.
    pub(crate) fn commit(mut self) -> Result<()> {
        fs::rename(&self.temp_path, &self.target).map_err(|source| {
            OutputError::AtomicWriteFailed {
                temp_path: self.temp_path.clone(),
                target_path: self.target.clone(),
                source,
            }
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed || !self.temp_path.exists() {
            return;
        }
        if let Err(err) = fs::remove_file(&self.temp_path) {
            tracing::warn!(
                path = %self.temp_path.display(),
                error = %err,
                "failed to remove temp file"
            );
        }
    }
}

/// Writes the content for `path` into its temp sibling and syncs it.
///
/// Parent directories of `path` are created. `path` itself is not touched
/// until the returned file is committed.
pub(crate) fn stage<F>(path: &Path, write: F) -> Result<StagedFile>
where
    F: FnOnce(&mut File, &Path) -> Result<()>,
{
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path).map_err(|source| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    let staged = StagedFile {
        temp_path,
        target: path.to_path_buf(),
        committed: false,
    };

    write(&mut file, path)?;

    file.sync_all().map_err(|source| OutputError::Io {
        operation: "sync",
        path: staged.temp_path.clone(),
        source,
    })?;
    Ok(staged)
}
