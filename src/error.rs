//! Error types for the toolbox crate
//!
//! Controller operations never fail: a disabled toolbox, a button the policy
//! does not allow or an unknown button name are silent no-ops. The errors here
//! cover the surrounding plumbing (configuration, logging, command parsing).
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the toolbox crate
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// Configuration or logging setup error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A text command could not be parsed into a toolbox event
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The controller event loop is not running
    #[error("Toolbox event loop is not running")]
    EventLoopClosed,
}

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, ToolboxError>;

/// Convert an error to a user-friendly message
///
/// Used by the simulator binary to report failures without the full error chain.
pub fn get_user_friendly_error(error: &ToolboxError) -> String {
    match error {
        ToolboxError::ConfigError(_) => "Failed to load the toolbox configuration.\n\n\
             Default settings will be used.\n\
             Check the file referenced by TOOLBOX_HOME."
            .to_string(),
        ToolboxError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        ToolboxError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The default toolbox settings will be used."
            )
        }
        ToolboxError::InvalidCommand(command) => {
            format!(
                "Unrecognised command: {command}\n\n\
                 Try: show [ms], hide [force], dock, undock, hover on|off, \
                 button <name> show|hide, side <container>"
            )
        }
        ToolboxError::EventLoopClosed => "The toolbox stopped processing commands.\n\n\
             Restart the simulator."
            .to_string(),
    }
}
