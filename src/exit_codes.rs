//! Unified exit codes for the arsplit binary.
//! These codes are part of the public contract; build scripts key on them.

pub const SUCCESS: i32 = 0;
pub const TOOL_FAILURE: i32 = 1; // External tool died without reporting an exit code
pub const NO_BITCODE: i32 = 2; // Archive contained no bitcode members
pub const FATAL: i32 = 2; // Config, usage, or filesystem error
