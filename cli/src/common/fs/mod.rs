//! # Fly Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem operations needed when Fly replaces its own binary:
//!
//! - **`io`**: resolving the running executable, marking files executable, and
//!   atomically swapping a new binary into place.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! # fn run_example(new_binary: &std::path::Path) -> anyhow::Result<()> {
//! let exe = io::current_executable()?;
//! io::make_executable(new_binary)?;
//! io::replace_file_atomically(new_binary, &exe)?;
//! # Ok(())
//! # }
//! ```
//!

/// Executable resolution, permissions, and atomic replacement.
pub mod io;
