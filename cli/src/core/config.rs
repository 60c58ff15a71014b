//! # Fly Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional Fly configuration file and resolves the
//! filesystem layout the rest of the CLI works against: the home directory
//! (site root and upward-search boundary), the base services manifest, the
//! provisioning marker directory, and the compose command used for every
//! external invocation.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. The file named by the `FLY_CONFIG` environment variable, if set
//! 2. The user file `~/.config/fly/config.toml` (platform config dir)
//! 3. Default values defined in the code
//!
//! Every section is optional. Paths may use `~` and are expanded after
//! loading; the resolved layout is exposed as `Paths`.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let paths = cfg.paths()?;
//! let compose = Compose::from_config(&cfg.compose);
//! compose.run(&paths.base_compose, &["up", "-d"]).await?;
//! ```
//!
use crate::core::error::{FlyError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// File name of every orchestration manifest (per site and base services).
pub const MANIFEST_FILENAME: &str = "docker-compose.yml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FLY_CONFIG";

/// Represents the main configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

/// Filesystem layout overrides. Unset entries derive from the home directory.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Root holding one directory per site; also the upward-search boundary.
    pub home: Option<String>,
    /// Manifest for the shared base services (database, proxy).
    pub base_compose: Option<String>,
    /// Provisioning marker directory checked by `fly status`.
    pub provisions_dir: Option<String>,
    /// Maximum depth below home visited by the fleet sweep. Unbounded if unset.
    pub sweep_max_depth: Option<usize>,
}

/// How the orchestration tool is invoked.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeConfig {
    /// Program and leading arguments, e.g. `["docker", "compose"]`.
    pub command: Vec<String>,
    /// Service targeted by `fly exec` / `fly wp` when none is named.
    pub default_service: String,
    /// Service names `fly exec` accepts as an explicit first argument.
    pub services: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            command: vec!["docker".to_string(), "compose".to_string()],
            default_service: "php".to_string(),
            services: vec![
                "php".to_string(),
                "nginx".to_string(),
                "litespeed".to_string(),
            ],
        }
    }
}

/// Release feed settings for `fly update`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateConfig {
    /// Endpoint returning the latest release as JSON (`tag_name`, `assets`).
    pub release_url: String,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            release_url: "https://api.github.com/repos/flywp/server-cli/releases/latest"
                .to_string(),
        }
    }
}

/// Fully resolved filesystem layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub home: PathBuf,
    /// `<home>/.fly`, holding base services data.
    pub fly_dir: PathBuf,
    pub base_compose: PathBuf,
    pub provisions_dir: PathBuf,
}

impl Config {
    /// Resolves the filesystem layout, falling back to the user's home directory.
    pub fn paths(&self) -> Result<Paths> {
        let home = match &self.paths.home {
            Some(home) => PathBuf::from(home),
            None => dirs::home_dir().ok_or_else(|| {
                anyhow!(FlyError::Config(
                    "Could not determine the home directory".to_string()
                ))
            })?,
        };
        let fly_dir = home.join(".fly");
        let base_compose = self
            .paths
            .base_compose
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| fly_dir.join(MANIFEST_FILENAME));
        let provisions_dir = self
            .paths
            .provisions_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(".provisions"));
        Ok(Paths {
            home,
            fly_dir,
            base_compose,
            provisions_dir,
        })
    }
}

/// Loads, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let mut config = load_user_config()?.unwrap_or_default();
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV_VAR) {
        let path = PathBuf::from(explicit);
        info!("Loading configuration from ${}: {}", CONFIG_ENV_VAR, path.display());
        return load_config_from_path(&path).map(Some);
    }
    let Some(proj_dirs) = ProjectDirs::from("com", "FlyWP", "fly") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) {
    for path in [
        &mut config.paths.home,
        &mut config.paths.base_compose,
        &mut config.paths.provisions_dir,
    ]
    .into_iter()
    .flatten()
    {
        *path = shellexpand::tilde(path.as_str()).into_owned();
        debug!("Expanded configured path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.compose.command.first().map_or(true, |p| p.is_empty()) {
        return Err(anyhow!(FlyError::Config(
            "compose.command must name a program".to_string()
        )));
    }
    if config.compose.default_service.is_empty() {
        return Err(anyhow!(FlyError::Config(
            "compose.default_service must not be empty".to_string()
        )));
    }
    if config.paths.sweep_max_depth == Some(0) {
        return Err(anyhow!(FlyError::Config(
            "paths.sweep_max_depth must be at least 1".to_string()
        )));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [paths]
            home = "/srv/sites"
            sweep_max_depth = 2

            [compose]
            command = ["docker-compose"]
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.paths.home.as_deref(), Some("/srv/sites"));
        assert_eq!(config.paths.sweep_max_depth, Some(2));
        assert_eq!(config.compose.command, vec!["docker-compose"]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.compose.default_service, "php");
        assert_eq!(config.compose.services, vec!["php", "nginx", "litespeed"]);
        assert_eq!(config.update, UpdateConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[compose]\nbinary = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_paths_derive_from_home() {
        let config = Config {
            paths: PathsConfig {
                home: Some("/home/fly".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let paths = config.paths().unwrap();
        assert_eq!(paths.home, PathBuf::from("/home/fly"));
        assert_eq!(paths.fly_dir, PathBuf::from("/home/fly/.fly"));
        assert_eq!(
            paths.base_compose,
            PathBuf::from("/home/fly/.fly/docker-compose.yml")
        );
        assert_eq!(paths.provisions_dir, PathBuf::from("/home/fly/.provisions"));
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            paths: PathsConfig {
                home: Some("~/sites".to_string()),
                base_compose: Some("/opt/fly/docker-compose.yml".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        expand_config_paths(&mut config);

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.paths.home.as_deref(),
            Some(home_dir.join("sites").to_string_lossy().as_ref())
        );
        assert_eq!(
            config.paths.base_compose.as_deref(),
            Some("/opt/fly/docker-compose.yml")
        );
    }

    #[test]
    fn test_validate_config() {
        assert!(validate_config(&Config::default()).is_ok());

        let mut empty_command = Config::default();
        empty_command.compose.command.clear();
        let err = validate_config(&empty_command).unwrap_err();
        assert!(err.to_string().contains("compose.command"));

        let mut zero_depth = Config::default();
        zero_depth.paths.sweep_max_depth = Some(0);
        assert!(validate_config(&zero_depth).is_err());
    }

    #[test]
    fn test_load_config_from_path() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("config.toml");
        fs::write(
            &file_path,
            "[update]\nrelease_url = \"http://127.0.0.1:9/latest\"\n",
        )
        .unwrap();

        let config = load_config_from_path(&file_path).unwrap();
        assert_eq!(config.update.release_url, "http://127.0.0.1:9/latest");

        fs::write(&file_path, "not = [valid").unwrap();
        let err = load_config_from_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
