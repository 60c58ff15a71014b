//! # Fly Status Handler
//!
//! File: cli/src/commands/status.rs
//!
//! ## Overview
//!
//! Implements `fly status`, a readiness report for the host. Each check
//! prints one line with ✅ or ❌:
//!
//! 1. `~/.fly` and the base services manifest inside it.
//! 2. The provisions directory (`~/.provisions`).
//! 3. The MySQL, Redis and Nginx data directories under `~/.fly`.
//! 4. Whether the `docker` binary is on `PATH`.
//! 5. Whether the Docker daemon answers, with its server version.
//!
//! The report is informational: failed checks never change the exit code.
//!
use crate::common::{docker, system, ui};
use crate::core::{
    config::{self, Paths},
    error::Result,
};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

/// Arguments for `fly status` (none).
#[derive(Parser, Debug)]
#[command(about = "Check the status of all services")]
pub struct StatusArgs {}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub ok: bool,
    pub message: String,
}

impl Check {
    fn exists(path: &Path, label: &str) -> Self {
        let ok = path.exists();
        debug!("{} -> {}", path.display(), ok);
        Check {
            ok,
            message: format!("{} {}", label, if ok { "exists" } else { "does not exist" }),
        }
    }
}

pub async fn handle_status(_args: StatusArgs) -> Result<()> {
    info!("Handling status command...");
    let cfg = config::load_config()?;
    let paths = cfg.paths()?;

    let mut checks = filesystem_checks(&paths);
    checks.push(docker_installed_check());
    checks.push(docker_running_check().await);

    for check in &checks {
        println!("{}", ui::status_line(check.ok, &check.message));
    }
    Ok(())
}

/// Presence checks for the directories and files a provisioned host has.
pub fn filesystem_checks(paths: &Paths) -> Vec<Check> {
    let database = paths.fly_dir.join("database");
    vec![
        Check::exists(&paths.fly_dir, "Root .fly directory"),
        Check::exists(&paths.base_compose, "Root docker-compose.yml"),
        Check::exists(&paths.provisions_dir, ".provisions directory"),
        Check::exists(&database.join("mysql"), "MySQL directory"),
        Check::exists(&database.join("redis"), "Redis directory"),
        Check::exists(&paths.fly_dir.join("nginx"), "Nginx directory"),
    ]
}

fn docker_installed_check() -> Check {
    let ok = system::find_tool("docker").is_some();
    Check {
        ok,
        message: if ok {
            "Docker is installed".to_string()
        } else {
            "Docker is not installed".to_string()
        },
    }
}

async fn docker_running_check() -> Check {
    match docker::server_version().await {
        Ok(version) => Check {
            ok: true,
            message: format!("Docker is running, version: {}", version),
        },
        Err(e) => {
            debug!("Docker daemon check failed: {:#}", e);
            Check {
                ok: false,
                message: "Docker is not running".to_string(),
            }
        }
    }
}
