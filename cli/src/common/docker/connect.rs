//! # Fly Docker Connection Helper
//!
//! File: cli/src/common/docker/connect.rs
//!
//! ## Overview
//!
//! Connects to the local Docker daemon through `bollard` and asks it for its
//! version. Used only by `fly status` to tell "installed" apart from
//! "installed and running"; all container operations go through the compose
//! CLI instead.
//!
//! ## Architecture
//!
//! - `connect_docker` calls `Docker::connect_with_local_defaults()` (the Unix
//!   socket, or `DOCKER_HOST` when set) and maps failures to
//!   `FlyError::DockerApi` with a hint that the daemon may be down.
//! - `server_version` performs the `/version` API call, which is the first
//!   request that actually reaches the daemon.
//!
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use bollard::Docker;
use tracing::instrument;

/// Establishes a client for the local Docker daemon.
///
/// # Errors
///
/// Returns `FlyError::DockerApi` if the connection cannot be configured.
#[instrument]
pub async fn connect_docker() -> Result<Docker> {
    Docker::connect_with_local_defaults()
        .map_err(|e| anyhow!(FlyError::DockerApi { source: e }))
        .context("Failed to connect to Docker daemon. Is it running and accessible?")
}

/// Returns the daemon's server version string, e.g. `"27.3.1"`.
#[instrument]
pub async fn server_version() -> Result<String> {
    let docker = connect_docker().await?;
    let version = docker
        .version()
        .await
        .map_err(|e| anyhow!(FlyError::DockerApi { source: e }))
        .context("Docker daemon did not answer the version request")?;
    Ok(version.version.unwrap_or_else(|| "unknown".to_string()))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Requires a running Docker daemon. Run locally with `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_server_version_with_daemon() {
        let version = server_version().await;
        assert!(version.is_ok(), "Should answer if Docker is running");
    }
}
