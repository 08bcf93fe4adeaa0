//! Shared test utilities and fake toolchain infrastructure.
//!
//! The fake `llvm-ar`/`llvm-link` are small shell scripts backed by `tar`
//! and `cat`, so end-to-end behavior, exit codes, and atomicity are
//! observable without LLVM installed. The "archives" they produce are tar
//! files; the pipeline never looks inside them, so the substitution is
//! invisible to the code under test.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Raw bitcode header.
pub const BC_MAGIC: [u8; 4] = [0x42, 0x43, 0xC0, 0xDE];
/// Bitcode wrapper header.
pub const BC_WRAPPER_MAGIC: [u8; 4] = [0x0B, 0x17, 0xC0, 0xDE];
/// ELF header; stands in for arbitrary native machine code.
pub const ELF_MAGIC: [u8; 4] = [0x7F, 0x45, 0x4C, 0x46];

/// A member body with the raw bitcode signature.
pub fn bc_member(payload: &[u8]) -> Vec<u8> {
    let mut bytes = BC_MAGIC.to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

/// A member body with the ELF signature.
pub fn elf_member(payload: &[u8]) -> Vec<u8> {
    let mut bytes = ELF_MAGIC.to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

/// Write an executable shell script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, body).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod script");
}

/// Fake `llvm-ar` built on `tar`: `t` lists, `x` extracts into the cwd,
/// `rcsDT` packs.
#[cfg(unix)]
pub fn fake_ar(dir: &Path) -> PathBuf {
    let path = dir.join("fake-ar");
    write_script(
        &path,
        r#"#!/bin/sh
set -e
op="$1"; shift
case "$op" in
    t) tar -tf "$1" ;;
    x) tar -xf "$1" ;;
    rcsDT) out="$1"; shift; tar -cf "$out" "$@" 2>/dev/null ;;
    *) echo "unsupported op: $op" >&2; exit 64 ;;
esac
"#,
    );
    path
}

/// Fake `llvm-link`: concatenates its inputs into `-o <out>`.
#[cfg(unix)]
pub fn fake_link(dir: &Path) -> PathBuf {
    let path = dir.join("fake-link");
    write_script(
        &path,
        r#"#!/bin/sh
set -e
out=""
if [ "$1" = "-o" ]; then out="$2"; shift 2; fi
cat "$@" > "$out"
"#,
    );
    path
}

/// Fake link tool that writes a partial output and then fails.
#[cfg(unix)]
pub fn failing_link(dir: &Path) -> PathBuf {
    let path = dir.join("failing-link");
    write_script(
        &path,
        r#"#!/bin/sh
out=""
if [ "$1" = "-o" ]; then out="$2"; shift 2; fi
printf 'partial' > "$out"
echo "link exploded" >&2
exit 1
"#,
    );
    path
}

/// Fake archive tool that rejects every operation, like a corrupt archive.
#[cfg(unix)]
pub fn failing_ar(dir: &Path) -> PathBuf {
    let path = dir.join("failing-ar");
    write_script(
        &path,
        r#"#!/bin/sh
echo "corrupt archive" >&2
exit 3
"#,
    );
    path
}

/// Fake archive tool whose listing reports one member that extraction
/// never produces.
#[cfg(unix)]
pub fn ghosting_ar(dir: &Path) -> PathBuf {
    let path = dir.join("ghosting-ar");
    write_script(
        &path,
        r#"#!/bin/sh
set -e
op="$1"; shift
case "$op" in
    t) tar -tf "$1"; echo "ghost.o" ;;
    x) tar -xf "$1" ;;
    rcsDT) out="$1"; shift; tar -cf "$out" "$@" 2>/dev/null ;;
    *) echo "unsupported op: $op" >&2; exit 64 ;;
esac
"#,
    );
    path
}

/// Build a fixture archive (in the fake tar-backed format) from named
/// members. Member names may contain directories.
#[cfg(unix)]
pub fn build_archive(dir: &Path, name: &str, members: &[(&str, Vec<u8>)]) -> PathBuf {
    let staging = dir.join(format!("{name}-staging"));
    fs::create_dir_all(&staging).expect("create staging dir");

    let mut names = Vec::new();
    for (member, bytes) in members {
        let path = staging.join(member);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create member dir");
        }
        fs::write(&path, bytes).expect("write member");
        names.push(*member);
    }

    let archive = dir.join(name);
    let status = Command::new("tar")
        .arg("-cf")
        .arg(&archive)
        .arg("-C")
        .arg(&staging)
        .args(&names)
        .status()
        .expect("run tar");
    assert!(status.success(), "tar failed to build fixture archive");
    archive
}

/// List the member names of a fake archive.
#[cfg(unix)]
pub fn archive_members(archive: &Path) -> Vec<String> {
    let output = Command::new("tar")
        .arg("-tf")
        .arg(archive)
        .output()
        .expect("run tar -tf");
    assert!(output.status.success(), "tar failed to list fixture archive");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// A ready test environment: tempdir with the fake toolchain installed.
pub struct ToolEnv {
    pub dir: TempDir,
    pub ar: PathBuf,
    pub link: PathBuf,
}

#[cfg(unix)]
pub fn tool_env() -> ToolEnv {
    let dir = TempDir::new().expect("create temp dir");
    let ar = fake_ar(dir.path());
    let link = fake_link(dir.path());
    ToolEnv { dir, ar, link }
}

/// Command for the compiled arsplit binary.
pub fn arsplit_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arsplit"))
}

/// Base arsplit invocation wired to the fake toolchain and isolated from
/// any config file on the host.
pub fn split_cmd(env: &ToolEnv, archive: &Path, out_bc: &Path, out_native: &Path) -> Command {
    split_cmd_tools(env, &env.ar, &env.link, archive, out_bc, out_native)
}

/// Like [`split_cmd`], but with an explicit toolchain (for the failing and
/// ghosting tool variants).
pub fn split_cmd_tools(
    env: &ToolEnv,
    ar: &Path,
    link: &Path,
    archive: &Path,
    out_bc: &Path,
    out_native: &Path,
) -> Command {
    let mut cmd = arsplit_cmd();
    cmd.arg("--archive")
        .arg(archive)
        .arg("--out-bc")
        .arg(out_bc)
        .arg("--out-native")
        .arg(out_native)
        .arg("--llvm-ar")
        .arg(ar)
        .arg("--llvm-link")
        .arg(link)
        .arg("--config")
        .arg(env.dir.path().join("no-such-config.toml"));
    cmd
}
