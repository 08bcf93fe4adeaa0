//! Recombiner — merge the classified sequences into the two output
//! artifacts.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use scopeguard::ScopeGuard;
use tracing::debug;

use crate::error::SplitError;
use crate::tools::{Archiver, BitcodeLinker};

/// Link the bitcode sequence into a single module at `out`.
///
/// Fails with [`SplitError::EmptyBitcodeSet`] when there is nothing to
/// link. The link tool writes to a sibling `.tmp` path which is renamed
/// onto `out` only after the tool reports success, so `out` is never
/// observed half-written: it is either absent, the previous content, or
/// the fully-formed new module.
pub fn merge_bitcode(
    linker: &BitcodeLinker,
    inputs: &[PathBuf],
    out: &Path,
) -> Result<(), SplitError> {
    if inputs.is_empty() {
        return Err(SplitError::EmptyBitcodeSet);
    }

    let tmp = sibling_tmp_path(out);
    // Whatever the link tool left behind is removed unless we reach the
    // rename and disarm the guard.
    let partial = scopeguard::guard(tmp.clone(), |p| {
        let _ = fs::remove_file(&p);
    });

    linker.link(&tmp, inputs)?;
    fs::rename(&tmp, out).map_err(|e| SplitError::Io {
        op: "rename linked module onto",
        path: out.to_path_buf(),
        source: e,
    })?;

    ScopeGuard::into_inner(partial);
    Ok(())
}

/// Repack the native sequence into an archive at `out`.
///
/// Any pre-existing file at `out` is removed first — no append semantics,
/// the output reflects exactly the current input. With no native members,
/// `out` becomes a zero-length placeholder so downstream consumers can
/// rely on its existence.
pub fn repack_native(
    archiver: &Archiver,
    inputs: &[PathBuf],
    out: &Path,
) -> Result<(), SplitError> {
    if out.exists() {
        fs::remove_file(out).map_err(|e| SplitError::Io {
            op: "remove stale archive",
            path: out.to_path_buf(),
            source: e,
        })?;
    }

    if inputs.is_empty() {
        debug!("no native members, writing placeholder at {}", out.display());
        return fs::write(out, b"").map_err(|e| SplitError::Io {
            op: "write placeholder archive",
            path: out.to_path_buf(),
            source: e,
        });
    }

    archiver.create_thin(out, inputs)
}

/// `out` with `.tmp` appended to its file name, beside the final path so
/// the rename stays on one filesystem.
fn sibling_tmp_path(out: &Path) -> PathBuf {
    let mut name = out
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(".tmp");
    out.with_file_name(name)
}
