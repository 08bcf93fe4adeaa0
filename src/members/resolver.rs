//! Extraction-layout resolution — member name → on-disk path.
//!
//! Archive tools lay out nested member names differently: some preserve
//! the embedded directory structure, some flatten members down to their
//! basename. Resolution consults an ordered list of layout rules and
//! takes the first candidate that exists on disk.

use std::path::{Path, PathBuf};

use tracing::trace;

/// A single extraction-layout convention.
pub struct LayoutRule {
    /// Short name (for diagnostics).
    pub name: &'static str,
    /// Compute the candidate path for a member under this convention.
    pub locate: fn(root: &Path, member: &str) -> PathBuf,
}

/// Layout conventions in resolution order.
pub fn layout_rules() -> Vec<LayoutRule> {
    vec![
        LayoutRule {
            name: "nested",
            locate: nested,
        },
        LayoutRule {
            name: "flattened",
            locate: flattened,
        },
    ]
}

/// The tool preserved any directory structure in the member name.
fn nested(root: &Path, member: &str) -> PathBuf {
    root.join(member)
}

/// The tool flattened nested names down to the basename.
fn flattened(root: &Path, member: &str) -> PathBuf {
    match Path::new(member).file_name() {
        Some(base) => root.join(base),
        None => root.join(member),
    }
}

/// Resolve a member name to an extracted file, trying each layout in order.
///
/// Returns `None` when no convention yields an existing file.
pub fn resolve_member(root: &Path, member: &str) -> Option<PathBuf> {
    for rule in layout_rules() {
        let candidate = (rule.locate)(root, member);
        if candidate.exists() {
            trace!("member '{}' resolved via {} layout", member, rule.name);
            return Some(candidate);
        }
    }
    None
}
