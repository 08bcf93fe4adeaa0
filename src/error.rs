//! Error types for the split pipeline.
//!
//! Provides the failure taxonomy and the mapping from each failure class
//! to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::exit_codes;

/// Errors that can occur during a split run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An external tool could not be started at all
    #[error("Failed to start {tool} '{exe}': {source}")]
    ToolSpawn {
        tool: &'static str,
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external tool ran and reported failure
    #[error("{tool} failed{}: {}", status_suffix(.status), stderr_excerpt(.stderr))]
    ToolFailure {
        tool: &'static str,
        status: Option<i32>,
        stderr: String,
    },

    /// Classification produced zero bitcode members
    #[error("no bitcode members found in archive")]
    EmptyBitcodeSet,

    /// A filesystem operation on one of the run's own paths failed
    #[error("failed to {op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Map error variant to the process exit code.
    ///
    /// A failing tool's own status is propagated when the OS reported one;
    /// every other fatal condition exits with the generic fatal code.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::ToolFailure { status, .. } => {
                (*status).filter(|code| *code != 0).unwrap_or(exit_codes::TOOL_FAILURE)
            }
            SplitError::EmptyBitcodeSet => exit_codes::NO_BITCODE,
            SplitError::Config(_) | SplitError::ToolSpawn { .. } | SplitError::Io { .. } => {
                exit_codes::FATAL
            }
        }
    }
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit code {code}"),
        None => " (killed by a signal)".to_string(),
    }
}

/// Last few non-empty stderr lines, so the single error line stays readable.
fn stderr_excerpt(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return "no diagnostic output".to_string();
    }
    let tail = lines.len().saturating_sub(3);
    lines[tail..].join("; ")
}
