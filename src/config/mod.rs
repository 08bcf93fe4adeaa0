//! Configuration loading for arsplit.
//!
//! The config file supplies defaults for the external toolchain so build
//! scripts don't have to repeat `--llvm-ar`/`--llvm-link` on every call.
//! Command-line flags always take precedence.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ToolsConfig};
