//! External toolchain invocations.
//!
//! The pipeline delegates every archive and bitcode operation to external
//! executables; this module owns their command lines and their failure
//! mapping. No retries, no timeouts — a failing tool aborts the run.

mod ar;
mod invoke;
mod link;

pub use ar::Archiver;
pub use link::BitcodeLinker;
