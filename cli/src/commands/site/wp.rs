//! # Fly WP-CLI Handler
//!
//! File: cli/src/commands/site/wp.rs
//!
//! Implements `fly wp <args...>`, which runs `wp <args...>` inside the
//! site's PHP service.
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly wp`.
#[derive(Parser, Debug)]
#[command(about = "Run wp-cli commands in the site's PHP container")]
pub struct WpArgs {
    #[command(flatten)]
    pub target: SiteTarget,

    /// Arguments passed to wp-cli.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl WpArgs {
    fn wp_command(&self) -> Vec<String> {
        let mut command = vec!["wp".to_string()];
        command.extend(self.args.iter().cloned());
        command
    }
}

pub async fn handle_wp(args: WpArgs) -> Result<()> {
    info!("Handling wp command...");
    let site = args.target.resolve()?;
    let service = site.compose.default_service().to_string();
    site.compose
        .run_in(&site.manifest, &service, &args.wp_command())
        .await
        .context("Error running wp-cli")
}
