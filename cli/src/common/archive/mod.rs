//! # Fly Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Archive handling for the self-update flow. Release binaries ship as
//! gzipped tarballs (`fly-<os>-<arch>.tar.gz`); they are unpacked in-process
//! rather than by shelling out to `tar`.
//!
//! - **`tar`**: Extraction of `.tar.gz` archives into a directory.
//!
//! ```rust
//! use crate::common::archive;
//! use std::path::Path;
//!
//! # fn run() -> anyhow::Result<()> {
//! archive::tar::extract_tar_gz(Path::new("/tmp/update.tar.gz"), Path::new("/tmp/update"))?;
//! # Ok(())
//! # }
//! ```
//!

pub mod tar;
