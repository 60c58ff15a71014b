//! # Fly Site Discovery (`common::compose::sites`)
//!
//! File: cli/src/common/compose/sites.rs
//!
//! ## Overview
//!
//! Finds every site managed under the home directory for the fleet sweep
//! (`fly sites start|stop|restart`).
//!
//! ## Traversal
//!
//! The home directory is walked recursively with `walkdir`. Any directory
//! whose name starts with `.` is pruned together with its whole subtree, so
//! `~/.fly` (base services) and other dot-directories never count as sites.
//! Every remaining directory holding a `docker-compose.yml` is reported once,
//! in file-name order. Home itself is not a site. Symlinked directories are
//! not followed. `paths.sweep_max_depth` bounds the walk when configured.
//!
use crate::core::config::MANIFEST_FILENAME;
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// One discovered site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub dir: PathBuf,
    pub manifest: PathBuf,
}

impl Site {
    /// Name shown to the user: the site directory relative to `home`.
    pub fn display_name(&self, home: &Path) -> String {
        pathdiff::diff_paths(&self.dir, home)
            .unwrap_or_else(|| self.dir.clone())
            .display()
            .to_string()
    }
}

/// Lists every site below `home`.
///
/// # Errors
///
/// Fails if `home` itself cannot be read. Unreadable subdirectories are
/// logged and skipped.
pub fn discover_sites(home: &Path, max_depth: Option<usize>) -> Result<Vec<Site>> {
    std::fs::read_dir(home)
        .with_context(|| format!("Error reading directory {}", home.display()))?;

    let walker = WalkDir::new(home)
        .min_depth(1)
        .max_depth(max_depth.unwrap_or(usize::MAX))
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    let mut sites = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable path during site discovery: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let manifest = entry.path().join(MANIFEST_FILENAME);
        if manifest.is_file() {
            debug!("Discovered site at {}", entry.path().display());
            sites.push(Site {
                dir: entry.path().to_path_buf(),
                manifest,
            });
        }
    }
    Ok(sites)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
