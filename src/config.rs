//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/netinv/netinv.toml`
//! 3. Environment variables: `NETINV_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::util::path::expand_path;

/// Unified configuration for netinv.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Inventory file to build the network from (default: built-in sample)
    pub inventory: Option<PathBuf>,
    /// Colored status output (default: true, NO_COLOR still applies)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inventory: None,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub inventory: Option<PathBuf>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for netinv.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "netinv").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("netinv.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            inventory: overlay
                .inventory
                .clone()
                .or_else(|| self.inventory.clone()),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(inventory) = &self.inventory {
            self.inventory = Some(expand_path(inventory));
        }
    }

    /// Load settings with layered precedence: defaults, global file, `NETINV_*` env vars.
    #[instrument(level = "debug")]
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Same as [`Settings::load`] with an explicit config file location.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("Loading config from {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply NETINV_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("NETINV").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_string("inventory"))? {
            settings.inventory = Some(PathBuf::from(val));
        }
        if let Some(val) = optional(config.get_bool("color"))? {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# netinv configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/netinv/netinv.toml
#   Env:    NETINV_* environment variables (explicit overrides)

# Inventory file describing the network (default: built-in sample network)
# inventory = "~/inventory.toml"

# Colored status output (NO_COLOR is honored regardless)
# color = true
"#
        .to_string()
    }
}

/// Unset keys keep the current value, unreadable ones are errors like in the config file.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
