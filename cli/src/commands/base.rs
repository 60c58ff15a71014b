//! # Fly Base Services Command Group
//!
//! File: cli/src/commands/base.rs
//!
//! ## Overview
//!
//! Implements `fly base {start|stop|restart}` against the shared base
//! services manifest (`~/.fly/docker-compose.yml` unless configured
//! otherwise), which runs the database, cache and proxy every site relies on.
//!
//! - `start`: `up -d`, then `ps` to show the result. Only `up -d` decides
//!   success.
//! - `stop`: `down`.
//! - `restart`: `down`, `up -d`, `ps`. Each step runs even if an earlier one
//!   failed; the command fails if `down` or `up -d` did.
//!
use crate::common::compose::Compose;
use crate::core::{
    config,
    error::{FlyError, Result},
};
use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Arguments for `fly base`.
#[derive(Parser, Debug)]
pub struct BaseArgs {
    #[command(subcommand)]
    command: BaseCommand,
}

#[derive(Subcommand, Debug)]
enum BaseCommand {
    /// Start base services
    Start,
    /// Stop base services
    Stop,
    /// Restart base services
    Restart,
}

pub async fn handle_base(args: BaseArgs) -> Result<()> {
    info!("Handling base {:?} command...", args.command);
    let cfg = config::load_config()?;
    let manifest = base_manifest(cfg.paths()?.base_compose)?;
    let compose = Compose::from_config(&cfg.compose);

    match args.command {
        BaseCommand::Start => start_base(&compose, &manifest).await,
        BaseCommand::Stop => stop_base(&compose, &manifest).await,
        BaseCommand::Restart => restart_base(&compose, &manifest).await,
    }
}

fn base_manifest(path: PathBuf) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(anyhow!(FlyError::ManifestNotFound {
            location: Some(path.display().to_string()),
        }));
    }
    Ok(path)
}

async fn start_base(compose: &Compose, manifest: &Path) -> Result<()> {
    compose
        .run(manifest, &["up", "-d"])
        .await
        .context("Error starting base services")?;
    show_status(compose, manifest).await;
    println!("Base services started successfully");
    Ok(())
}

async fn stop_base(compose: &Compose, manifest: &Path) -> Result<()> {
    compose
        .run(manifest, &["down"])
        .await
        .context("Error stopping base services")?;
    println!("Base services stopped successfully");
    Ok(())
}

async fn restart_base(compose: &Compose, manifest: &Path) -> Result<()> {
    let stopped = compose.run(manifest, &["down"]).await;
    if let Err(e) = &stopped {
        println!("Error stopping base services: {:#}", e);
    }
    let started = compose.run(manifest, &["up", "-d"]).await;
    if let Err(e) = &started {
        println!("Error starting base services: {:#}", e);
    }
    show_status(compose, manifest).await;

    if stopped.is_err() || started.is_err() {
        bail!("Failed to restart base services");
    }
    println!("Base services restarted successfully");
    Ok(())
}

/// Runs `ps`; a failure here is reported but never fails the command.
async fn show_status(compose: &Compose, manifest: &Path) {
    if let Err(e) = compose.run(manifest, &["ps"]).await {
        warn!("ps failed for {}: {:#}", manifest.display(), e);
        println!("Error checking status of base services: {:#}", e);
    }
}
