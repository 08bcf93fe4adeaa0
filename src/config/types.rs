use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
}

/// Default executable paths for the external toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Archive tool (llvm-ar or compatible).
    #[serde(default)]
    pub ar: Option<PathBuf>,
    /// Bitcode link tool (llvm-link or compatible).
    #[serde(default)]
    pub link: Option<PathBuf>,
}
