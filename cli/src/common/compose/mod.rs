//! # Fly Compose Utilities (`common::compose`)
//!
//! File: cli/src/common/compose/mod.rs
//!
//! ## Overview
//!
//! Everything Fly knows about the orchestration tool lives here. There is no
//! engine: a command handler locates a manifest, builds an argument list, and
//! hands both to `Compose`, which runs `<command> -f <manifest> <args...>` as a
//! child process with its output streamed to the terminal.
//!
//! ## Architecture
//!
//! - **`Compose`** (this file): the process dispatcher. `run` forwards
//!   arbitrary compose arguments; `run_in_service` issues an `exec` into one
//!   running service, choosing the service from the first argument when it
//!   is a recognised name and falling back to the default service otherwise.
//! - **`locate`**: finds a site's `docker-compose.yml`, either by exact
//!   domain below home or by walking upward from the working directory.
//! - **`sites`**: discovers every site manifest below home for fleet sweeps.
//!
//! Failures are never distinguished programmatically beyond `FlyError`; the
//! calling command adds its own context ("error starting container", ...).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::compose::{locate, Compose};
//!
//! # async fn run_example(cfg: &crate::core::config::Config) -> anyhow::Result<()> {
//! let paths = cfg.paths()?;
//! let manifest = locate::find_manifest(&paths.home, Some("example.com"))?;
//! let compose = Compose::from_config(&cfg.compose);
//! compose.run(&manifest, &["up", "-d"]).await?;
//! compose.run_in_service(&manifest, &["nginx".into(), "nginx".into(), "-t".into()]).await?;
//! compose.run_in(&manifest, compose.default_service(), &["wp".into(), "plugin".into(), "list".into()]).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::process;
use crate::core::{config::ComposeConfig, error::Result};
use anyhow::bail;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

/// Locates site manifests by domain or by upward search.
pub mod locate;
/// Discovers site directories below home for fleet-wide operations.
pub mod sites;

/// Dispatcher for the external orchestration tool.
#[derive(Debug, Clone)]
pub struct Compose {
    program: String,
    leading_args: Vec<String>,
    default_service: String,
    services: Vec<String>,
}

impl Compose {
    /// Builds a dispatcher from the `[compose]` configuration section.
    ///
    /// The configuration is validated on load, so `command` always names a program.
    pub fn from_config(cfg: &ComposeConfig) -> Self {
        let (program, leading_args) = match cfg.command.split_first() {
            Some((program, rest)) => (program.clone(), rest.to_vec()),
            None => (String::from("docker-compose"), Vec::new()),
        };
        Self {
            program,
            leading_args,
            default_service: cfg.default_service.clone(),
            services: cfg.services.clone(),
        }
    }

    /// Full argument list (after the program) for one invocation against `manifest`.
    pub fn arguments<S: AsRef<str>>(&self, manifest: &Path, args: &[S]) -> Vec<String> {
        let mut full = self.leading_args.clone();
        full.push("-f".to_string());
        full.push(manifest.to_string_lossy().into_owned());
        full.extend(args.iter().map(|a| a.as_ref().to_string()));
        full
    }

    /// Runs the orchestration tool with `-f <manifest> <args...>` and waits for it.
    pub async fn run<S: AsRef<str>>(&self, manifest: &Path, args: &[S]) -> Result<()> {
        let full = self.arguments(manifest, args);
        process::run_streamed(&self.program, &full).await
    }

    /// Splits `container_args` into the target service and the command to run.
    ///
    /// If the first element is a recognised service name it selects the
    /// service and is consumed; otherwise the default service is used and
    /// every element belongs to the command.
    pub fn route<'a>(&'a self, container_args: &'a [String]) -> (&'a str, &'a [String]) {
        match container_args.split_first() {
            Some((first, rest)) if self.services.iter().any(|s| s == first) => {
                (first.as_str(), rest)
            }
            _ => (self.default_service.as_str(), container_args),
        }
    }

    /// Builds the `exec` arguments for `command` inside `service`. `-T`
    /// disables pseudo-TTY allocation for non-interactive callers.
    pub fn exec_args(
        &self,
        service: &str,
        command: &[String],
        allocate_tty: bool,
    ) -> Result<Vec<String>> {
        if command.is_empty() {
            bail!("No command provided");
        }
        debug!("Routing {:?} to service '{}'", command, service);

        let mut args = vec!["exec".to_string()];
        if !allocate_tty {
            args.push("-T".to_string());
        }
        args.push(service.to_string());
        args.extend(command.iter().cloned());
        Ok(args)
    }

    /// Executes a command inside an already-running service container,
    /// selecting the service with `route`.
    pub async fn run_in_service(&self, manifest: &Path, container_args: &[String]) -> Result<()> {
        let (service, command) = self.route(container_args);
        self.run_in(manifest, service, command).await
    }

    /// Executes `command` inside the named service container.
    pub async fn run_in(&self, manifest: &Path, service: &str, command: &[String]) -> Result<()> {
        let allocate_tty = std::io::stdin().is_terminal();
        let args = self.exec_args(service, command, allocate_tty)?;
        self.run(manifest, &args).await
    }

    /// Service used when a command names none.
    pub fn default_service(&self) -> &str {
        &self.default_service
    }
}
