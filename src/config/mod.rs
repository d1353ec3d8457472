//! Configuration management module
//!
//! This module holds the static toolbox configuration and loads it from
//! $TOOLBOX_HOME/toolbox/config.json.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::ToolboxConfig;
