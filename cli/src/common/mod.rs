//! # Fly Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers. Command-specific logic lives
//! in `commands::`, foundational configuration and errors in `core::`, and
//! everything that touches the outside world (child processes, the Docker
//! daemon, the filesystem, the network) lives here.
//!
//! ## Architecture
//!
//! - **`archive`**: In-process extraction of `.tar.gz` release archives.
//! - **`compose`**: Manifest location, site discovery and the compose process dispatcher.
//! - **`docker`**: Docker Engine API check used by `fly status`.
//! - **`fs`**: Executable resolution and atomic binary replacement.
//! - **`network`**: HTTP fetches for the release feed.
//! - **`process`**: Streaming execution of external programs.
//! - **`release`**: Release metadata, version comparison and self-update.
//! - **`system`**: Privilege checks and tool detection.
//! - **`ui`**: Shared terminal output and prompts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{compose::{locate, Compose}, system};
//!
//! # async fn run_example(cfg: &crate::core::config::Config) -> anyhow::Result<()> {
//! system::ensure_not_root()?;
//! let manifest = locate::find_manifest(&cfg.paths()?.home, None)?;
//! Compose::from_config(&cfg.compose).run(&manifest, &["ps"]).await?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for handling archive files (release tarballs).
pub mod archive;
/// Manifest discovery and the compose dispatcher.
pub mod compose;
/// Docker daemon check.
pub mod docker;
/// Filesystem operations for binary replacement.
pub mod fs;
/// HTTP helpers for the release feed.
pub mod network;
/// Execution of external processes.
pub mod process;
/// Release feed parsing and self-update.
pub mod release;
/// Host privilege and tool checks.
pub mod system;
/// Terminal output helpers.
pub mod ui;
