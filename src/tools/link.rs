//! Bitcode link tool wrapper (llvm-link or compatible).

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SplitError;
use crate::tools::invoke;

/// Wrapper around the external bitcode link tool.
pub struct BitcodeLinker {
    exe: PathBuf,
}

impl BitcodeLinker {
    pub fn new(exe: PathBuf) -> Self {
        Self { exe }
    }

    /// Merge `inputs` into a single module at `out`.
    pub fn link(&self, out: &Path, inputs: &[PathBuf]) -> Result<(), SplitError> {
        invoke::run(
            "link tool",
            Command::new(&self.exe).arg("-o").arg(out).args(inputs),
        )?;
        Ok(())
    }
}
