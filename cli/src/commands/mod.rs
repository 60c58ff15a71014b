//! # Fly Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates every command of the Fly CLI and owns the explicit
//! command tree. `main.rs` parses a `Commands` value with Clap and hands it to
//! `dispatch`, which enforces the privilege contract and routes to the
//! matching handler. Nothing registers itself globally.
//!
//! ## Architecture
//!
//! - `status`: host readiness report.
//! - `sites`: fleet sweeps over every site below home.
//! - `base`: the shared base-services manifest (`~/.fly/docker-compose.yml`).
//! - `site`: per-site commands (`start`, `stop`, `restart`, `exec`, `logs`, `wp`).
//! - `version` / `update`: build information and self-update.
//!
//! ## Privilege contract
//!
//! Every command except `update` refuses to run as root, before any side
//! effect happens. `update` performs the opposite check itself.
//!
use crate::common::system;
use crate::core::error::Result;
use clap::Subcommand;
use tracing::debug;

/// `fly base ...`: base services management.
pub mod base;
/// Per-site commands sharing the `--domain` targeting flag.
pub mod site;
/// `fly sites ...`: start/stop/restart every site.
pub mod sites;
/// `fly status`: readiness checks.
pub mod status;
/// `fly update`: self-update from the release feed.
pub mod update;
/// `fly version`.
pub mod version;

/// All top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the status of all services
    Status(status::StatusArgs),
    /// Manage all sites
    Sites(sites::SitesArgs),
    /// Manage base services
    Base(base::BaseArgs),
    /// Run wp-cli commands
    Wp(site::wp::WpArgs),
    /// Start the site
    Start(site::start::StartArgs),
    /// Stop the site
    Stop(site::stop::StopArgs),
    /// Restart the site, or a single container of it
    Restart(site::restart::RestartArgs),
    /// Execute a command in a site container
    Exec(site::exec::ExecArgs),
    /// Show logs of the site containers
    Logs(site::logs::LogsArgs),
    /// Print the version number of fly-cli
    Version(version::VersionArgs),
    /// Update fly-cli to the latest version
    Update(update::UpdateArgs),
}

impl Commands {
    /// Whether the command must run as root. All others must not.
    pub fn requires_root(&self) -> bool {
        matches!(self, Commands::Update(_))
    }
}

/// Runs `command` after applying the privilege contract.
///
/// `verbose` is the global `-v` count; only `version` reads it directly.
pub async fn dispatch(command: Commands, verbose: u8) -> Result<()> {
    if !command.requires_root() {
        system::ensure_not_root()?;
    }
    debug!("Dispatching {:?}", command);

    match command {
        Commands::Status(args) => status::handle_status(args).await,
        Commands::Sites(args) => sites::handle_sites(args).await,
        Commands::Base(args) => base::handle_base(args).await,
        Commands::Wp(args) => site::wp::handle_wp(args).await,
        Commands::Start(args) => site::start::handle_start(args).await,
        Commands::Stop(args) => site::stop::handle_stop(args).await,
        Commands::Restart(args) => site::restart::handle_restart(args).await,
        Commands::Exec(args) => site::exec::handle_exec(args).await,
        Commands::Logs(args) => site::logs::handle_logs(args).await,
        Commands::Version(args) => version::handle_version(args, verbose),
        Commands::Update(args) => update::handle_update(args).await,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["fly"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", args, e))
            .command
    }

    #[test]
    fn test_parses_top_level_commands() {
        assert!(matches!(parse(&["status"]), Commands::Status(_)));
        assert!(matches!(parse(&["sites", "start"]), Commands::Sites(_)));
        assert!(matches!(parse(&["base", "restart"]), Commands::Base(_)));
        assert!(matches!(parse(&["start"]), Commands::Start(_)));
        assert!(matches!(parse(&["stop", "-d", "example.com"]), Commands::Stop(_)));
        assert!(matches!(parse(&["restart", "nginx"]), Commands::Restart(_)));
        assert!(matches!(parse(&["logs", "-f"]), Commands::Logs(_)));
        assert!(matches!(parse(&["version"]), Commands::Version(_)));
        assert!(matches!(parse(&["update", "--yes"]), Commands::Update(_)));
    }

    #[test]
    fn test_only_update_requires_root() {
        assert!(parse(&["update"]).requires_root());
        for args in [&["status"][..], &["start"], &["wp", "plugin", "list"], &["version"]] {
            assert!(!parse(args).requires_root(), "{:?}", args);
        }
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert!(TestCli::try_parse_from(["fly", "deploy"]).is_err());
        assert!(TestCli::try_parse_from(["fly", "sites", "prune"]).is_err());
    }

    #[tokio::test]
    async fn test_dispatch_refuses_root_before_side_effects() {
        if !system::is_root() {
            return;
        }
        let err = dispatch(parse(&["version"]), 0).await.unwrap_err();
        assert!(err.to_string().contains("should not run this command as root"));
    }
}
