//! # Fly Release Feed (`common::release`)
//!
//! File: cli/src/common/release/mod.rs
//!
//! ## Overview
//!
//! Reads the release-metadata endpoint and decides whether a newer build is
//! available and which asset fits this machine.
//!
//! ## Version comparison
//!
//! A release is "newer" when its tag is strictly greater than the running
//! version under plain string ordering. This is not semantic-version aware:
//! `"v9" > "v10"` and `"v0.10.0" < "v0.9.0"`. The behaviour is kept so the
//! set of versions that trigger an update stays predictable across releases.
//!
//! ## Asset naming
//!
//! Assets are named `fly-<os>-<arch>.tar.gz` using Go-style architecture
//! names (`amd64`, `arm64`, ...). Only Linux builds are published.
//!
//! ## Architecture
//!
//! - `Release` / `Asset`: the subset of the feed's JSON Fly uses.
//! - `Platform`: OS/architecture pair, `Platform::current()` for this build.
//! - `check_for_update`: fetch + compare.
//! - `install`: download, extract and swap in the new binary.
//!
use crate::common::network;
use crate::core::error::Result;
use serde::Deserialize;
use tracing::{debug, info};

/// Downloading and installing a release asset.
pub mod install;

/// One published release.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A downloadable file attached to a release.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// Operating system and CPU architecture, as reported by `std::env::consts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform<'a> {
    pub os: &'a str,
    pub arch: &'a str,
}

impl Platform<'static> {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Platform {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl Platform<'_> {
    /// Base name of the published binary, e.g. `fly-linux-amd64`.
    ///
    /// `None` when no build is published for this platform.
    pub fn binary_name(&self) -> Option<String> {
        if self.os != "linux" {
            return None;
        }
        let arch = release_arch(self.arch)?;
        Some(format!("fly-linux-{}", arch))
    }

    /// Expected asset file name, e.g. `fly-linux-amd64.tar.gz`.
    pub fn asset_name(&self) -> Option<String> {
        self.binary_name().map(|name| format!("{}.tar.gz", name))
    }
}

/// Maps a Rust architecture name to the release naming convention.
fn release_arch(arch: &str) -> Option<&'static str> {
    match arch {
        "x86_64" => Some("amd64"),
        "aarch64" => Some("arm64"),
        "x86" => Some("386"),
        "arm" => Some("arm"),
        _ => None,
    }
}

/// Result of comparing the feed against the running version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub latest: String,
    pub has_update: bool,
}

/// `true` iff `latest` sorts strictly after `current` as a plain string.
pub fn has_update(latest: &str, current: &str) -> bool {
    latest > current
}

/// Picks the asset built for `platform`, if the release has one.
pub fn select_asset<'r>(release: &'r Release, platform: &Platform<'_>) -> Option<&'r Asset> {
    let expected = platform.asset_name()?;
    debug!("Looking for release asset '{}'", expected);
    release.assets.iter().find(|asset| asset.name == expected)
}

/// Fetches the latest release description from `url`.
pub async fn fetch_latest(url: &str) -> Result<Release> {
    let client = network::client()?;
    network::fetch_json(&client, url).await
}

/// Fetches the latest release and compares it with `current_version`.
pub async fn check_for_update(url: &str, current_version: &str) -> Result<UpdateCheck> {
    let release = fetch_latest(url).await?;
    let check = UpdateCheck {
        has_update: has_update(&release.tag_name, current_version),
        latest: release.tag_name,
    };
    info!(
        "Latest release {} (running {}), update available: {}",
        check.latest, current_version, check.has_update
    );
    Ok(check)
}
