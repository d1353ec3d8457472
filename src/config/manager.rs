//! Configuration manager for loading the toolbox configuration
//!
//! The configuration lives in `$TOOLBOX_HOME/toolbox/config.json`, or the
//! current directory when `TOOLBOX_HOME` is unset. A missing or corrupt file
//! yields the default configuration.

use crate::config::models::ToolboxConfig;
use crate::error::{Result, StringError, ToolboxError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the base directory for config and logs
pub const HOME_ENV_VAR: &str = "TOOLBOX_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Base directory holding `config.json` and the log files
    ///
    /// Returns: $TOOLBOX_HOME/toolbox
    pub fn data_dir() -> PathBuf {
        let home = std::env::var(HOME_ENV_VAR).unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join("toolbox")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<ToolboxConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// If the file doesn't exist or cannot be parsed, returns the default configuration.
    pub fn load_from(path: &Path) -> Result<ToolboxConfig> {
        if !path.exists() {
            info!("Configuration file {} not found, using defaults", path.display());
            return Ok(ToolboxConfig::default());
        }

        if path.is_dir() {
            return Err(ToolboxError::ConfigError(StringError::new(format!(
                "{} is a directory",
                path.display()
            ))));
        }

        let json = std::fs::read_to_string(path)?;

        match serde_json::from_str::<ToolboxConfig>(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(ToolboxConfig::default())
            }
        }
    }
}
