//! Header sniffing and the bitcode/native partition.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::members::resolver::resolve_member;

/// Raw bitcode header signature (`BC\xc0\xde`).
pub const BITCODE_MAGIC: [u8; 4] = [0x42, 0x43, 0xC0, 0xDE];
/// Bitcode wrapper header signature.
pub const BITCODE_WRAPPER_MAGIC: [u8; 4] = [0x0B, 0x17, 0xC0, 0xDE];

/// What a member's header says it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Recognized bitcode (raw or wrapper signature).
    Bitcode,
    /// Anything else — assumed pre-compiled machine code.
    Native,
}

/// Result of classifying the extracted members.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedSet {
    /// Bitcode member paths, in enumeration order.
    pub bitcode: Vec<PathBuf>,
    /// Native member paths, in enumeration order.
    pub native: Vec<PathBuf>,
    /// Warnings produced during classification (e.g., missing members).
    pub warnings: Vec<String>,
}

/// Classify every enumerated member found under `root`.
///
/// A member that resolves to no file under any layout convention is
/// dropped from both sequences with a warning; it never aborts the run.
pub fn classify_members(root: &Path, members: &[String]) -> ClassifiedSet {
    let mut set = ClassifiedSet::default();

    for member in members {
        let Some(path) = resolve_member(root, member) else {
            set.warnings
                .push(format!("missing member after extract: {member}"));
            continue;
        };
        match sniff(&path) {
            MemberKind::Bitcode => set.bitcode.push(path),
            MemberKind::Native => set.native.push(path),
        }
    }

    set
}

/// Read the leading 4 bytes and match them against the known signatures.
///
/// Any read failure degrades to `Native`; classification never raises for
/// an unreadable file.
pub fn sniff(path: &Path) -> MemberKind {
    let mut header = [0u8; 4];
    let readable = File::open(path)
        .and_then(|mut f| f.read_exact(&mut header))
        .is_ok();

    if readable && (header == BITCODE_MAGIC || header == BITCODE_WRAPPER_MAGIC) {
        MemberKind::Bitcode
    } else {
        MemberKind::Native
    }
}
