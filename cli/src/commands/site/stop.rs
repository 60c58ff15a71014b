//! # Fly Site Stop Handler
//!
//! File: cli/src/commands/site/stop.rs
//!
//! Implements `fly stop` (`down` against the site manifest).
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly stop`.
#[derive(Parser, Debug)]
#[command(about = "Stop the Docker containers for the site")]
pub struct StopArgs {
    #[command(flatten)]
    pub target: SiteTarget,
}

pub async fn handle_stop(args: StopArgs) -> Result<()> {
    info!("Handling stop command...");
    let site = args.target.resolve()?;
    site.compose
        .run(&site.manifest, &["down"])
        .await
        .context("Error stopping container")
}
