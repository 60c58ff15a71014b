//! # Fly Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Helpers for the last step of `fly update`, swapping the running binary:
//! - **`current_executable`**: the real path of the running binary, with
//!   symbolic links resolved so the link target is replaced, not the link.
//! - **`make_executable`**: sets mode `0755`.
//! - **`replace_file_atomically`**: copies the new file next to the target and
//!   renames it over the target. The rename is atomic because both paths
//!   share a directory (and therefore a filesystem), so the old binary is
//!   never observed half-written.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Permission bits given to installed binaries.
const EXECUTABLE_MODE: u32 = 0o755;

/// Returns the canonical path of the running executable.
pub fn current_executable() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to get current executable path")?;
    fs::canonicalize(&exe)
        .with_context(|| format!("failed to resolve symlinks for {}", exe.display()))
}

/// Marks `path` as executable (`0755`).
pub fn make_executable(path: &Path) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .with_context(|| format!("failed to make {} executable", path.display()))?;
    debug!("Set mode {:o} on {}", EXECUTABLE_MODE, path.display());
    Ok(())
}

/// Replaces `target` with the contents of `source`.
///
/// The new content is staged in a temporary file in `target`'s directory and
/// renamed over `target`. The staged file is removed if anything fails.
pub fn replace_file_atomically(source: &Path, target: &Path) -> Result<()> {
    let parent = target
        .parent()
        .with_context(|| format!("{} has no parent directory", target.display()))?;

    let staged = tempfile::Builder::new()
        .prefix(".fly-update-")
        .tempfile_in(parent)
        .with_context(|| format!("failed to stage new binary in {}", parent.display()))?;
    fs::copy(source, staged.path()).with_context(|| {
        format!(
            "failed to copy {} to {}",
            source.display(),
            staged.path().display()
        )
    })?;
    make_executable(staged.path())?;

    staged
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace old binary at {}", target.display()))?;
    info!("Replaced {}", target.display());
    Ok(())
}
