//! arsplit — split a static archive into a linked bitcode module and an
//! archive of native members.
//!
//! The pipeline runs three sequential stages:
//!
//! ```text
//! Archive → Enumerate → Extract + Classify → Recombine → {module, native archive}
//! ```
//!
//! Each stage is a small function that can be tested independently; the
//! binary in `main.rs` is a thin clap front-end over [`pipeline::split`].

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod members;
pub mod pipeline;
pub mod recombine;
pub mod tools;
pub mod workdir;

pub use error::SplitError;
pub use pipeline::{split, SplitRequest, SplitSummary};
