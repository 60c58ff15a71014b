//! # Fly Site Logs Handler
//!
//! File: cli/src/commands/site/logs.rs
//!
//! ## Overview
//!
//! Implements `fly logs [container]`. With no container, logs from every
//! service in the site are shown. `--follow` keeps streaming until the user
//! interrupts the process.
//!
//! ```bash
//! fly logs
//! fly logs nginx -f
//! fly logs --domain example.com php
//! ```
//!
use super::SiteTarget;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// Arguments for `fly logs`.
#[derive(Parser, Debug)]
#[command(about = "Show logs of the site's Docker containers")]
pub struct LogsArgs {
    #[command(flatten)]
    pub target: SiteTarget,

    /// Keep streaming new log output.
    #[arg(short, long)]
    pub follow: bool,

    /// Optional service whose logs to show. Defaults to all services.
    pub container: Option<String>,
}

impl LogsArgs {
    fn compose_args(&self) -> Vec<String> {
        let mut args = vec!["logs".to_string()];
        if self.follow {
            args.push("-f".to_string());
        }
        args.extend(self.container.iter().cloned());
        args
    }
}

pub async fn handle_logs(args: LogsArgs) -> Result<()> {
    info!("Handling logs command...");
    debug!("Logs args: {:?}", args);
    let site = args.target.resolve()?;
    site.compose
        .run(&site.manifest, &args.compose_args())
        .await
        .context("Error showing logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_args() {
        let plain = LogsArgs::try_parse_from(["logs"]).unwrap();
        assert_eq!(plain.compose_args(), vec!["logs"]);

        let followed = LogsArgs::try_parse_from(["logs", "php", "--follow"]).unwrap();
        assert_eq!(followed.compose_args(), vec!["logs", "-f", "php"]);
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(LogsArgs::try_parse_from(["logs", "php", "nginx"]).is_err());
    }
}
