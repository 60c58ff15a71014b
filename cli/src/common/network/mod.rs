//! # Fly Network Utilities (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! HTTP helpers used by the self-update flow: fetching the release-metadata
//! JSON document and downloading a release asset to disk. Both are single
//! GET requests with no retry; any non-success status becomes
//! `FlyError::Http`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::network;
//!
//! # async fn run_example() -> anyhow::Result<()> {
//! let client = network::client()?;
//! let release: serde_json::Value = network::fetch_json(&client, "https://example.com/latest").await?;
//! network::download_to_file(&client, "https://example.com/fly.tar.gz", std::path::Path::new("/tmp/fly.tar.gz")).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

#[cfg(test)]
pub(crate) mod testing;

/// Sent with every request; the GitHub API rejects anonymous user agents.
const USER_AGENT: &str = concat!("fly-cli/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for release requests.
pub fn client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// GETs `url` and decodes the JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    debug!("Fetching {}", url);
    let response = send(client, url).await?;
    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to parse JSON response from {}", url))
}

/// GETs `url` and streams the body into a new file at `dest`.
///
/// Returns the number of bytes written.
pub async fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<u64> {
    info!("Downloading {} to {}", url, dest.display());
    let mut response = send(client, url).await?;
    let mut file = tokio::fs::File::create(dest)
        .await
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("Failed while downloading {}", url))?
    {
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .with_context(|| format!("Failed to flush {}", dest.display()))?;
    debug!("Downloaded {} bytes", written);
    Ok(written)
}

async fn send(client: &Client, url: &str) -> Result<Response> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!(FlyError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        }));
    }
    Ok(response)
}
