//! # Fly Site Start Handler
//!
//! File: cli/src/commands/site/start.rs
//!
//! Implements `fly start`: brings the site's services up in the background
//! with `up -d`.
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly start`.
#[derive(Parser, Debug)]
#[command(about = "Start the Docker containers for the site")]
pub struct StartArgs {
    #[command(flatten)]
    pub target: SiteTarget,
}

pub async fn handle_start(args: StartArgs) -> Result<()> {
    info!("Handling start command...");
    let site = args.target.resolve()?;
    site.compose
        .run(&site.manifest, &["up", "-d"])
        .await
        .context("Error starting container")
}
