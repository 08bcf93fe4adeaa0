//! Pipeline — ties the split stages together.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::SplitError;
use crate::members::classify_members;
use crate::recombine::{merge_bitcode, repack_native};
use crate::tools::{Archiver, BitcodeLinker};
use crate::workdir::WorkArea;

/// Inputs for one split run.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    /// Source archive; read-only input, never mutated.
    pub archive: PathBuf,
    /// Output path for the merged bitcode module.
    pub out_bitcode: PathBuf,
    /// Output path for the native-member archive.
    pub out_native: PathBuf,
    /// Caller-supplied working area. `None` means the run creates and
    /// removes its own.
    pub workdir: Option<PathBuf>,
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy)]
pub struct SplitSummary {
    /// Members merged into the bitcode module.
    pub bitcode_members: usize,
    /// Members repacked into the native archive.
    pub native_members: usize,
    /// Members that could not be located after extraction.
    pub skipped_members: usize,
}

/// Run the whole pipeline: enumerate, extract, classify, recombine.
///
/// Strictly sequential; the working area is released on every exit path
/// (the `?` operator drops it) unless the caller supplied one.
pub fn split(
    request: &SplitRequest,
    archiver: &Archiver,
    linker: &BitcodeLinker,
) -> Result<SplitSummary, SplitError> {
    // Extraction runs with its cwd inside the working area, so the archive
    // path has to survive the cwd change.
    let archive = absolutize(&request.archive)?;

    // Stage 1: enumerate members
    let members = archiver.list_members(&archive)?;
    debug!("archive lists {} members", members.len());

    // Stage 2: extract and classify
    let area = WorkArea::acquire(request.workdir.clone())?;
    archiver.extract_all(&archive, area.path())?;
    let classified = classify_members(area.path(), &members);
    for warning in &classified.warnings {
        warn!("{warning}");
    }

    // Stage 3: recombine
    merge_bitcode(linker, &classified.bitcode, &request.out_bitcode)?;
    repack_native(archiver, &classified.native, &request.out_native)?;

    let summary = SplitSummary {
        bitcode_members: classified.bitcode.len(),
        native_members: classified.native.len(),
        skipped_members: classified.warnings.len(),
    };
    info!(
        "split {}: {} bitcode, {} native, {} skipped",
        request.archive.display(),
        summary.bitcode_members,
        summary.native_members,
        summary.skipped_members
    );
    Ok(summary)
}

fn absolutize(path: &Path) -> Result<PathBuf, SplitError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| SplitError::Io {
            op: "resolve",
            path: path.to_path_buf(),
            source: e,
        })
}
