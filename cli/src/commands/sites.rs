//! # Fly Sites Command Group
//!
//! File: cli/src/commands/sites.rs
//!
//! ## Overview
//!
//! Implements `fly sites {start|stop|restart}`, which applies one action to
//! every site below the home directory.
//!
//! ## Sweep rules
//!
//! - Sites are discovered recursively below home. Hidden directories (names
//!   starting with `.`) are pruned together with everything beneath them, so
//!   `~/.fly` (base services) is never treated as a site.
//! - `[paths] sweep_max_depth` bounds the walk; it is unbounded by default.
//! - Each site is processed in turn and awaited before the next one starts.
//! - A failing site is reported and the sweep moves on. The command itself
//!   only fails when the home directory cannot be read.
//! - `restart` is a full stop sweep followed by a full start sweep.
//!
//! ```bash
//! fly sites start
//! fly sites restart
//! ```
//!
use crate::common::compose::{
    sites::{discover_sites, Site},
    Compose,
};
use crate::core::{config, error::Result};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{info, warn};

/// Arguments for `fly sites`.
#[derive(Parser, Debug)]
pub struct SitesArgs {
    #[command(subcommand)]
    command: SitesCommand,
}

#[derive(Subcommand, Debug)]
enum SitesCommand {
    /// Start all sites
    Start,
    /// Stop all sites
    Stop,
    /// Restart all sites
    Restart,
}

/// What a sweep does to each site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAction {
    Start,
    Stop,
}

impl SweepAction {
    fn compose_args(self) -> &'static [&'static str] {
        match self {
            SweepAction::Start => &["up", "-d"],
            SweepAction::Stop => &["down"],
        }
    }

    fn progress(self) -> &'static str {
        match self {
            SweepAction::Start => "Starting",
            SweepAction::Stop => "Stopping",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            SweepAction::Start => "start",
            SweepAction::Stop => "stop",
        }
    }
}

/// Outcome of one sweep, by site display name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

impl SweepReport {
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }
}

pub async fn handle_sites(args: SitesArgs) -> Result<()> {
    info!("Handling sites {:?} command...", args.command);
    let cfg = config::load_config()?;
    let home = cfg.paths()?.home;
    let compose = Compose::from_config(&cfg.compose);
    let max_depth = cfg.paths.sweep_max_depth;

    match args.command {
        SitesCommand::Start => {
            sweep_home(&compose, &home, max_depth, SweepAction::Start).await?;
        }
        SitesCommand::Stop => {
            sweep_home(&compose, &home, max_depth, SweepAction::Stop).await?;
        }
        SitesCommand::Restart => {
            sweep_home(&compose, &home, max_depth, SweepAction::Stop).await?;
            sweep_home(&compose, &home, max_depth, SweepAction::Start).await?;
        }
    }
    Ok(())
}

/// Discovers the sites below `home` and applies `action` to each of them.
pub async fn sweep_home(
    compose: &Compose,
    home: &Path,
    max_depth: Option<usize>,
    action: SweepAction,
) -> Result<SweepReport> {
    let sites = discover_sites(home, max_depth)
        .with_context(|| format!("Failed to {} sites", action.verb()))?;
    let report = sweep(compose, home, &sites, action).await;
    if report.is_empty() {
        println!("No sites found to {}.", action.verb());
    } else if !report.failed.is_empty() {
        println!(
            "Failed to {} {} of {} sites: {}",
            action.verb(),
            report.failed.len(),
            sites.len(),
            report.failed.join(", ")
        );
    }
    Ok(report)
}

/// Applies `action` to each site in order. Failures are logged and skipped.
pub async fn sweep(
    compose: &Compose,
    home: &Path,
    sites: &[Site],
    action: SweepAction,
) -> SweepReport {
    let mut report = SweepReport::default();
    for site in sites {
        let name = site.display_name(home);
        println!("{} site in {}", action.progress(), name);
        match compose.run(&site.manifest, action.compose_args()).await {
            Ok(()) => report.succeeded.push(name),
            Err(e) => {
                warn!("Failed to {} site {}: {:#}", action.verb(), name, e);
                report.failed.push(name);
            }
        }
    }
    report
}
