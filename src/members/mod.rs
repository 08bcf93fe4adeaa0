//! Member classification — extracted files → {Bitcode, Native}.
//!
//! ```text
//! member names → resolve on-disk path → sniff 4-byte header → two ordered buckets
//! ```
//!
//! Resolution and classification only read the working area; they never
//! invoke external tools and never abort the run on a per-member problem.

mod classifier;
mod resolver;

pub use classifier::{
    classify_members, sniff, ClassifiedSet, MemberKind, BITCODE_MAGIC, BITCODE_WRAPPER_MAGIC,
};
pub use resolver::{layout_rules, resolve_member, LayoutRule};
