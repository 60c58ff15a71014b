//! # Fly Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Fly CLI. Domain
//! failures are variants of `FlyError`; everything is propagated as
//! `anyhow::Error` so call sites can attach context ("error starting
//! container", "failed to download update", ...).
//!
//! ## Architecture
//!
//! - `FlyError`: a `thiserror` enum for failures callers may want to recognise.
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! The variants follow the error taxonomy of the tool:
//! - Manifest not found (user guidance printed, operation aborted)
//! - External tool failure (missing binary, spawn failure, non-zero exit)
//! - Docker daemon unreachable (status check only)
//! - Network / archive failure during self-update
//! - Privilege violation (refused before any side effect)
//!
//! ## Examples
//!
//! ```rust
//! // Downcast to react to a specific failure.
//! match result {
//!     Err(e) if e.downcast_ref::<FlyError>().is_some_and(|fe| matches!(fe, FlyError::ManifestNotFound { .. })) => {
//!         ui::print_no_manifest_help();
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Fly application.
#[derive(Error, Debug)]
pub enum FlyError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// No `docker-compose.yml` could be located for the requested site.
    #[error("No docker-compose.yml file found{}", .location.as_deref().map(|l| format!(" at {l}")).unwrap_or_default())]
    ManifestNotFound { location: Option<String> },

    #[error("'{tool}' was not found on PATH")]
    ToolNotFound { tool: String },

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },

    #[error("you should not run this command as root")]
    RunAsRoot,

    #[error("the update command must be run as root")]
    RootRequired,

    #[error("no suitable binary found for this system (OS: {os}, ARCH: {arch})")]
    NoMatchingAsset { os: String, arch: String },

    #[error("HTTP request to {url} failed with status {status}")]
    Http { url: String, status: u16 },

    #[error("Docker API interaction failed: {source}")]
    DockerApi {
        #[from]
        source: bollard::errors::Error,
    },

    #[error("Archive error: {0}")]
    Archive(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
