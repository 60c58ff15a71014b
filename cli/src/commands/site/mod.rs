//! # Fly Per-Site Commands
//!
//! File: cli/src/commands/site/mod.rs
//!
//! ## Overview
//!
//! `start`, `stop`, `restart`, `exec`, `logs` and `wp` all operate on one
//! site's `docker-compose.yml`. They share the targeting rules implemented
//! here:
//!
//! - `--domain/-d <domain>` selects `<home>/<domain>/docker-compose.yml`.
//! - Without it the manifest is searched upward from the working directory,
//!   stopping at home.
//!
//! When no manifest is found the user is shown how to target a site, and the
//! command fails with `FlyError::ManifestNotFound`.
//!
//! ## Usage
//!
//! ```bash
//! cd ~/example.com && fly start
//! fly logs --domain example.com -f
//! fly exec nginx nginx -t
//! fly wp plugin list
//! ```
//!
use crate::common::{
    compose::{locate, Compose},
    ui,
};
use crate::core::{
    config,
    error::{FlyError, Result},
};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod exec;
pub mod logs;
pub mod restart;
pub mod start;
pub mod stop;
pub mod wp;

/// Which site a command targets.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteTarget {
    /// Site domain below the home directory (e.g. example.com).
    /// Defaults to the site containing the current directory.
    #[arg(short, long)]
    pub domain: Option<String>,
}

/// A resolved site: the dispatcher plus the manifest it runs against.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub compose: Compose,
    pub manifest: PathBuf,
}

impl SiteTarget {
    /// Loads the configuration and locates the targeted manifest.
    pub fn resolve(&self) -> Result<SiteContext> {
        let cfg = config::load_config()?;
        let home = cfg.paths()?.home;
        let manifest = self.manifest_in(&home)?;
        Ok(SiteContext {
            compose: Compose::from_config(&cfg.compose),
            manifest,
        })
    }

    /// Locates the manifest below `home`, printing guidance when none is found.
    fn manifest_in(&self, home: &Path) -> Result<PathBuf> {
        let manifest = locate::find_manifest(home, self.domain.as_deref()).inspect_err(|e| {
            if let Some(FlyError::ManifestNotFound { .. }) = e.downcast_ref::<FlyError>() {
                ui::print_no_manifest_help();
            }
        })?;
        debug!("Using manifest {}", manifest.display());
        Ok(manifest)
    }
}
