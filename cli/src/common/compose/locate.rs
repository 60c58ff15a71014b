//! # Fly Manifest Locator (`common::compose::locate`)
//!
//! File: cli/src/common/compose/locate.rs
//!
//! ## Overview
//!
//! Resolves which `docker-compose.yml` a per-site command operates on.
//!
//! - With a domain: only `<home>/<domain>/docker-compose.yml` is considered.
//!   No upward search happens, even if a manifest exists higher up.
//! - Without a domain: starting at the working directory, each directory is
//!   checked in turn, moving to the parent until a manifest is found. The
//!   home directory is the last one checked. A start directory outside the
//!   home subtree stops at the filesystem root instead.
//!
//! The result is only a snapshot: the file may disappear between the check and
//! the compose invocation that uses it.
//!
use crate::core::config::MANIFEST_FILENAME;
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Finds the manifest for `domain`, or searches upward from the current directory.
///
/// # Errors
///
/// Returns `FlyError::ManifestNotFound` when no manifest matches, or an I/O
/// error if the current directory cannot be determined.
pub fn find_manifest(home: &Path, domain: Option<&str>) -> Result<PathBuf> {
    let found = match domain {
        Some(domain) => locate_by_domain(home, domain),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            locate_upward(home, &cwd)
        }
    };
    found.ok_or_else(|| {
        anyhow!(FlyError::ManifestNotFound {
            location: domain.map(|d| home.join(d).display().to_string()),
        })
    })
}

/// Returns `<home>/<domain>/docker-compose.yml` if that exact file exists.
///
/// The domain must be a single directory name; anything that would escape
/// the one-level-below-home layout is treated as not found.
pub fn locate_by_domain(home: &Path, domain: &str) -> Option<PathBuf> {
    let mut components = Path::new(domain).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            debug!("Rejecting domain '{}': not a single directory name", domain);
            return None;
        }
    }
    let candidate = home.join(domain).join(MANIFEST_FILENAME);
    debug!("Checking {}", candidate.display());
    candidate.is_file().then_some(candidate)
}

/// Walks from `start` towards the root and returns the nearest manifest.
///
/// The walk stops after checking `home`, or at the filesystem root when
/// `start` is not below `home`.
///
/// Both paths are compared after resolving symbolic links, so a home
/// reached through a link (e.g. `/home -> /var/home`) still bounds the walk.
pub fn locate_upward(home: &Path, start: &Path) -> Option<PathBuf> {
    let home = resolve_links(home);
    let mut dir = resolve_links(start);
    loop {
        let candidate = dir.join(MANIFEST_FILENAME);
        debug!("Checking {}", candidate.display());
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir == home || !dir.pop() {
            return None;
        }
    }
}

/// Canonical form of `path`, or `path` unchanged if it cannot be resolved.
fn resolve_links(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
