//! # Fly System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host inspection used by the privilege contract and `fly status`:
//!
//! - Every command except `update` refuses to run as the superuser, so site
//!   files are never created with root ownership.
//! - `update` requires the superuser, because it replaces the installed binary.
//! - Tool detection resolves external programs on `PATH`.
//!
//! ```rust
//! use crate::common::system;
//!
//! # fn run_example() -> anyhow::Result<()> {
//! system::ensure_not_root()?;
//! if system::find_tool("docker").is_none() {
//!     println!("Docker is not installed");
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FlyError, Result};
use anyhow::anyhow;
use std::path::PathBuf;
use tracing::debug;

/// Whether the process runs with an effective UID of 0.
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Refuses to continue when running as root.
pub fn ensure_not_root() -> Result<()> {
    check_not_root(is_root())
}

/// Refuses to continue unless running as root.
pub fn ensure_root() -> Result<()> {
    check_root(is_root())
}

fn check_not_root(root: bool) -> Result<()> {
    if root {
        return Err(anyhow!(FlyError::RunAsRoot));
    }
    Ok(())
}

fn check_root(root: bool) -> Result<()> {
    if !root {
        return Err(anyhow!(FlyError::RootRequired));
    }
    Ok(())
}

/// Locates `name` on `PATH`.
pub fn find_tool(name: &str) -> Option<PathBuf> {
    let found = which::which(name).ok();
    debug!("Tool '{}' resolved to {:?}", name, found);
    found
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_checks() {
        assert!(check_not_root(false).is_ok());
        assert!(check_root(true).is_ok());

        let err = check_not_root(true).unwrap_err();
        assert_eq!(err.to_string(), "you should not run this command as root");

        let err = check_root(false).unwrap_err();
        assert_eq!(err.to_string(), "the update command must be run as root");
    }

    #[test]
    fn test_guards_agree_with_euid() {
        // Exactly one of the two guards passes for the current process.
        assert_ne!(ensure_not_root().is_ok(), ensure_root().is_ok());
    }

    #[test]
    fn test_find_tool() {
        assert!(find_tool("sh").is_some());
        assert!(find_tool("fly-nonexistent-tool-12345").is_none());
    }
}
