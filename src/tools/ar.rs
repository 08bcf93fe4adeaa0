//! Archive tool wrapper (llvm-ar or compatible).

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SplitError;
use crate::tools::invoke;

/// Wrapper around the external archive tool.
///
/// Owns the executable path and the invocation flags; callers deal in
/// archives and member paths only.
pub struct Archiver {
    exe: PathBuf,
}

impl Archiver {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// List member names, in archive order.
    ///
    /// Names are trimmed of incidental whitespace and blank lines are
    /// discarded; everything else is preserved as reported. A failing list
    /// operation is fatal — a malformed archive must abort the run, not
    /// produce an empty member set.
    pub fn list_members(&self, archive: &Path) -> Result<Vec<String>, SplitError> {
        let output = invoke::run(
            "archive tool",
            Command::new(&self.exe).arg("t").arg(archive),
        )?;
        Ok(parse_member_list(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Extract every member into `dest`.
    ///
    /// All-or-nothing: any failure aborts the run. The tool runs with its
    /// working directory set to `dest`, so `archive` must be absolute.
    pub fn extract_all(&self, archive: &Path, dest: &Path) -> Result<(), SplitError> {
        invoke::run(
            "archive tool",
            Command::new(&self.exe)
                .arg("x")
                .arg(archive)
                .current_dir(dest),
        )?;
        Ok(())
    }

    /// Pack `members` into a fresh archive at `out`.
    ///
    /// `rcsDT`: replace/create with a symbol table, deterministic, thin.
    pub fn create_thin(&self, out: &Path, members: &[PathBuf]) -> Result<(), SplitError> {
        invoke::run(
            "archive tool",
            Command::new(&self.exe).arg("rcsDT").arg(out).args(members),
        )?;
        Ok(())
    }
}

/// Split raw `t` output into member names.
fn parse_member_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
