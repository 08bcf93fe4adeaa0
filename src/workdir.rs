//! Scoped working area for extracted members.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::SplitError;

/// The staging directory holding extracted members for one run.
///
/// Acquire/release pairing: a run-owned area is uniquely named and removed
/// when the handle drops, on every exit path. A caller-supplied area is
/// created if absent but never deleted — ownership stays with the caller.
pub enum WorkArea {
    /// Created by this run; removed on drop.
    Owned(TempDir),
    /// Supplied by the caller; left in place on drop.
    External(PathBuf),
}

impl WorkArea {
    /// Acquire a working area, preferring the caller-supplied path.
    pub fn acquire(requested: Option<PathBuf>) -> Result<Self, SplitError> {
        match requested {
            Some(path) => {
                fs::create_dir_all(&path).map_err(|e| SplitError::Io {
                    op: "create working directory",
                    path: path.clone(),
                    source: e,
                })?;
                Ok(WorkArea::External(path))
            }
            None => tempfile::Builder::new()
                .prefix("arsplit-")
                .tempdir()
                .map(WorkArea::Owned)
                .map_err(|e| SplitError::Io {
                    op: "create working directory",
                    path: std::env::temp_dir(),
                    source: e,
                }),
        }
    }

    /// Path of the working area.
    pub fn path(&self) -> &Path {
        match self {
            WorkArea::Owned(dir) => dir.path(),
            WorkArea::External(path) => path,
        }
    }
}
