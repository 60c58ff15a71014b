//! # Fly TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Unpacks gzipped tarballs (`.tar.gz`) downloaded from the release feed.
//!
//! ## Architecture
//!
//! The archive file is streamed through `flate2`'s Gzip decoder into the
//! `tar` crate's `Archive::unpack`, which refuses entries that would land
//! outside the destination directory.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::tar;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let scratch = tempfile::tempdir()?;
//! tar::extract_tar_gz(Path::new("fly-linux-amd64.tar.gz"), scratch.path())?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// # Extract Gzipped TAR Archive (`extract_tar_gz`)
///
/// Unpacks every entry of `archive_path` into `dest_dir`, preserving the
/// relative layout and file modes stored in the archive.
///
/// ## Arguments
///
/// * `archive_path` - The `.tar.gz` file to read.
/// * `dest_dir` - Existing directory receiving the extracted entries.
///
/// ## Errors
///
/// Returns an `Err` if the archive cannot be opened, is not valid gzip/tar
/// data, or an entry cannot be written.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open archive {}", archive_path.display()))?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive.unpack(dest_dir).map_err(|e| {
        anyhow!(FlyError::Archive(format!(
            "failed to extract {} into {}: {}",
            archive_path.display(),
            dest_dir.display(),
            e
        )))
    })?;
    debug!(
        "Extracted {} into {}",
        archive_path.display(),
        dest_dir.display()
    );
    Ok(())
}
