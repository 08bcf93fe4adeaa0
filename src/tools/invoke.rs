use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::SplitError;

/// Run a prepared command to completion, capturing its output.
///
/// A non-success exit status maps to [`SplitError::ToolFailure`] carrying
/// the tool's status and stderr; failure to start the process at all maps
/// to [`SplitError::ToolSpawn`].
pub(crate) fn run(tool: &'static str, cmd: &mut Command) -> Result<Output, SplitError> {
    debug!("running {tool}: {cmd:?}");
    let output = cmd.output().map_err(|e| SplitError::ToolSpawn {
        tool,
        exe: PathBuf::from(cmd.get_program()),
        source: e,
    })?;

    if !output.status.success() {
        return Err(SplitError::ToolFailure {
            tool,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(output)
}
