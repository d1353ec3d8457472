//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<log_dir>/toolbox.log`
//! and rotation on startup keeping nine historical files.

use crate::error::{Result, ToolboxError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (toolbox.log.1 through toolbox.log.9)
const MAX_LOG_FILES: u8 = 9;

/// File name of the current session log
const LOG_FILE_NAME: &str = "toolbox.log";

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above; the appender just writes one file per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("toolbox")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| ToolboxError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ToolboxError::ConfigError(Box::new(e)))?;

    tracing::info!("toolbox v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// - toolbox.log.9 is deleted (oldest log)
/// - toolbox.log.N -> toolbox.log.N+1 for N in 8..=1
/// - toolbox.log -> toolbox.log.1
///
/// A fresh toolbox.log is then created by the appender.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.is_file() {
        return Ok(());
    }

    let archived = |generation: u8| {
        let mut name = log_path.as_os_str().to_owned();
        name.push(format!(".{generation}"));
        PathBuf::from(name)
    };

    match std::fs::remove_file(archived(MAX_LOG_FILES)) {
        Err(e) if e.kind() != ErrorKind::NotFound => return Err(e.into()),
        _ => {}
    }

    // Shift oldest first so no archive is overwritten
    for generation in (1..MAX_LOG_FILES).rev() {
        let from = archived(generation);
        if from.is_file() {
            std::fs::rename(&from, archived(generation + 1))?;
        }
    }

    std::fs::rename(log_path, archived(1))?;
    Ok(())
}
