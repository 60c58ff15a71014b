//! # Fly Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Fly CLI, which manages
//! WordPress sites deployed with docker compose. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Handing the parsed command to `commands::dispatch`
//!
//! ## Architecture
//!
//! - Every command is a variant of `commands::Commands`, built here by Clap
//! - `commands::dispatch` applies the root-privilege contract and routes to a handler
//! - All errors are propagated to this level for consistent reporting
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! fly --help
//!
//! # Start the site in the current directory with extra logging
//! fly -v start
//!
//! # Run wp-cli against a specific site
//! fly wp --domain example.com plugin list
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Dispatch to the command handler
//! 4. Format and display any error, exiting with status 1
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command definitions and handlers
mod common; // Shared utilities (compose, release, system, ...)
mod core; // Configuration, errors and build metadata

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "fly",
    about = "Fly CLI for managing WordPress sites",
    long_about = "A CLI tool for managing WordPress sites using Docker and custom commands.",
    propagate_version = true,
    version = core::version::VERSION
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::dispatch(cli.command, cli.verbose).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["fly", "version", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = Cli::try_parse_from(["fly", "-v", "status"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }
}
