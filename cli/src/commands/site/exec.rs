//! # Fly Site Exec Handler
//!
//! File: cli/src/commands/site/exec.rs
//!
//! ## Overview
//!
//! Implements `fly exec [service] <command...>`: runs a command inside an
//! already-running container of the site.
//!
//! If the first argument names a known service (`php`, `nginx`, `litespeed`
//! by default) it selects the container; otherwise the command runs in the
//! default service (`php`). Everything after the service name is passed
//! through untouched, including arguments that look like flags.
//!
//! ```bash
//! fly exec ls -la            # compose exec php ls -la
//! fly exec nginx nginx -t    # compose exec nginx nginx -t
//! ```
//!
//! When stdin is not a terminal `-T` is added so the command can be used in
//! pipelines.
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly exec`.
#[derive(Parser, Debug)]
#[command(about = "Execute a command in a site container")]
pub struct ExecArgs {
    #[command(flatten)]
    pub target: SiteTarget,

    /// Optional service name followed by the command and its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "SERVICE? COMMAND")]
    pub command: Vec<String>,
}

pub async fn handle_exec(args: ExecArgs) -> Result<()> {
    info!("Handling exec command...");
    let site = args.target.resolve()?;
    site.compose
        .run_in_service(&site.manifest, &args.command)
        .await
        .context("Error executing command")
}
