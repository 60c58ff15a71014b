//! # Fly Self-Update Installer (`common::release::install`)
//!
//! File: cli/src/common/release/install.rs
//!
//! ## Overview
//!
//! Replaces the running `fly` binary with the newest published build:
//!
//! 1. Refuse unless running as root.
//! 2. Fetch the release description and pick the asset for this platform.
//! 3. Download it into a scoped temporary directory.
//! 4. Extract the tarball in-process and find `fly-<os>-<arch>`.
//! 5. Mark it executable and atomically rename it over the real path of the
//!    running executable (symlinks resolved).
//!
//! The temporary directory is a `tempfile::TempDir`, so it is removed on every
//! return path. Replacement is the final step; any earlier failure leaves the
//! installed binary untouched.
//!
use super::{fetch_latest, select_asset, Platform};
use crate::common::{archive, fs::io, network, system};
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Downloads the latest release from `release_url` and installs it over the
/// running executable.
pub async fn apply_update(release_url: &str) -> Result<()> {
    system::ensure_root()?;

    let release = fetch_latest(release_url)
        .await
        .context("failed to get latest release")?;
    let platform = Platform::current();
    let asset = select_asset(&release, &platform).ok_or_else(|| {
        anyhow!(FlyError::NoMatchingAsset {
            os: platform.os.to_string(),
            arch: platform.arch.to_string(),
        })
    })?;
    info!("Selected asset {} from {}", asset.name, release.tag_name);

    let scratch = tempfile::Builder::new()
        .prefix("fly-cli-update")
        .tempdir()
        .context("failed to create temp directory")?;

    let archive_path = scratch.path().join("update.tar.gz");
    let client = network::client()?;
    network::download_to_file(&client, &asset.browser_download_url, &archive_path)
        .await
        .context("failed to download update")?;

    let binary = unpack_binary(&archive_path, scratch.path(), &platform)?;
    let exe = io::current_executable()?;
    install_binary(&binary, &exe)?;
    info!("Installed {} at {}", release.tag_name, exe.display());
    Ok(())
}

/// Extracts `archive_path` into `dest` and returns the path of the platform binary.
fn unpack_binary(archive_path: &Path, dest: &Path, platform: &Platform<'_>) -> Result<PathBuf> {
    archive::tar::extract_tar_gz(archive_path, dest).context("failed to extract archive")?;

    let name = platform.binary_name().ok_or_else(|| {
        anyhow!(FlyError::NoMatchingAsset {
            os: platform.os.to_string(),
            arch: platform.arch.to_string(),
        })
    })?;
    let binary = dest.join(&name);
    if !binary.is_file() {
        return Err(anyhow!(FlyError::Archive(format!(
            "archive does not contain {}",
            name
        ))));
    }
    debug!("Found extracted binary at {}", binary.display());
    Ok(binary)
}

/// Marks `binary` executable and swaps it in at `target`.
fn install_binary(binary: &Path, target: &Path) -> Result<()> {
    io::make_executable(binary)?;
    io::replace_file_atomically(binary, target)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::fs::{self, File};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    const LINUX_AMD64: Platform<'static> = Platform {
        os: "linux",
        arch: "x86_64",
    };

    fn write_release_archive(path: &Path, binary_name: &str, contents: &[u8]) {
        let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, binary_name, contents).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn test_unpack_and_install() {
        let scratch = tempdir().unwrap();
        let install_dir = tempdir().unwrap();
        let archive_path = scratch.path().join("update.tar.gz");
        write_release_archive(&archive_path, "fly-linux-amd64", b"fresh build");
        let target = install_dir.path().join("fly");
        fs::write(&target, "stale build").unwrap();

        let binary = unpack_binary(&archive_path, scratch.path(), &LINUX_AMD64).unwrap();
        install_binary(&binary, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "fresh build");
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_unpack_requires_platform_binary() {
        let scratch = tempdir().unwrap();
        let archive_path = scratch.path().join("update.tar.gz");
        write_release_archive(&archive_path, "fly-linux-arm64", b"wrong arch");

        let err = unpack_binary(&archive_path, scratch.path(), &LINUX_AMD64).unwrap_err();
        assert!(err.to_string().contains("archive does not contain fly-linux-amd64"));
    }

    #[tokio::test]
    async fn test_downloaded_archive_unpacks() {
        let source = tempdir().unwrap();
        let built = source.path().join("fly-linux-amd64.tar.gz");
        write_release_archive(&built, "fly-linux-amd64", b"served build");
        let base = network::testing::serve_once("200 OK", fs::read(&built).unwrap()).await;

        let scratch = tempdir().unwrap();
        let archive_path = scratch.path().join("update.tar.gz");
        let client = network::client().unwrap();
        let url = format!("{}/fly-linux-amd64.tar.gz", base);
        network::download_to_file(&client, &url, &archive_path)
            .await
            .unwrap();

        let binary = unpack_binary(&archive_path, scratch.path(), &LINUX_AMD64).unwrap();
        assert_eq!(fs::read_to_string(binary).unwrap(), "served build");
    }

    #[tokio::test]
    async fn test_apply_update_privilege_and_network_failures() {
        let result = apply_update("http://127.0.0.1:9/latest").await;
        let err = result.unwrap_err();
        if system::is_root() {
            // Root passes the guard and fails on the unreachable feed.
            assert!(err.to_string().contains("failed to get latest release"));
        } else {
            assert!(err
                .downcast_ref::<FlyError>()
                .is_some_and(|fe| matches!(fe, FlyError::RootRequired)));
        }
    }
}
