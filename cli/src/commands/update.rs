//! # Fly Update Handler
//!
//! File: cli/src/commands/update.rs
//!
//! ## Overview
//!
//! Implements `fly update`, the only command that must run as root:
//!
//! 1. Refuse without root, pointing the user to `sudo fly update`.
//! 2. Fetch the latest release tag and compare it with the running version.
//! 3. Ask for confirmation unless `--yes` was given.
//! 4. Download, extract and swap in the new binary
//!    (`common::release::install::apply_update`).
//!
//! Declining the prompt or already being up to date exits successfully.
//!
//! ```bash
//! sudo fly update
//! sudo fly update --yes
//! ```
//!
use crate::common::{release, system, ui};
use crate::core::{config, error::Result, version};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly update`.
#[derive(Parser, Debug)]
#[command(about = "Update fly-cli to the latest version")]
pub struct UpdateArgs {
    /// Automatically answer yes to the update confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn handle_update(args: UpdateArgs) -> Result<()> {
    info!("Handling update command...");
    if let Err(e) = system::ensure_root() {
        println!("Please run 'sudo fly update'");
        return Err(e);
    }

    let cfg = config::load_config()?;
    let release_url = &cfg.update.release_url;

    let check = release::check_for_update(release_url, version::VERSION)
        .await
        .context("Error checking for updates")?;
    if !check.has_update {
        println!("You are already running the latest version.");
        return Ok(());
    }
    println!("New version available: {}", check.latest);

    if !args.yes && !ui::confirm("Do you want to update?")? {
        println!("Update cancelled.");
        return Ok(());
    }

    println!("Updating...");
    release::install::apply_update(release_url)
        .await
        .context("Error updating")?;
    println!("Update successful. Please restart fly.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_yes_flag() {
        assert!(UpdateArgs::try_parse_from(["update", "-y"]).unwrap().yes);
        assert!(UpdateArgs::try_parse_from(["update", "--yes"]).unwrap().yes);
        assert!(!UpdateArgs::try_parse_from(["update"]).unwrap().yes);
    }
}
