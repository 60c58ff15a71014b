//! # Fly Site Restart Handler
//!
//! File: cli/src/commands/site/restart.rs
//!
//! Implements `fly restart [container]`. Without a container every service of
//! the site is restarted; otherwise only the named one.
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Arguments for `fly restart`.
#[derive(Parser, Debug)]
#[command(about = "Restart the Docker containers for the site")]
pub struct RestartArgs {
    #[command(flatten)]
    pub target: SiteTarget,

    /// Optional service to restart (e.g. php, nginx).
    pub container: Option<String>,
}

impl RestartArgs {
    fn compose_args(&self) -> Vec<String> {
        let mut args = vec!["restart".to_string()];
        args.extend(self.container.iter().cloned());
        args
    }
}

pub async fn handle_restart(args: RestartArgs) -> Result<()> {
    info!("Handling restart command...");
    let site = args.target.resolve()?;
    site.compose
        .run(&site.manifest, &args.compose_args())
        .await
        .context("Error restarting container")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_args() {
        let all = RestartArgs::try_parse_from(["restart"]).unwrap();
        assert_eq!(all.compose_args(), vec!["restart"]);

        let one = RestartArgs::try_parse_from(["restart", "-d", "example.com", "nginx"]).unwrap();
        assert_eq!(one.compose_args(), vec!["restart", "nginx"]);
        assert_eq!(one.target.domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_rejects_multiple_containers() {
        assert!(RestartArgs::try_parse_from(["restart", "php", "nginx"]).is_err());
    }
}
