//! File logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a file under the
//! user's data directory. Nothing is installed when logging is disabled and
//! the `log` macros become no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Location of the log file
pub fn log_file_path() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir);
    base.join(APP_DIR_NAME).join(LOG_FILE_NAME)
}

/// Build the dispatcher for a config without installing it
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;
    let path = log_file_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger; returns whether a logger was installed
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    dispatch(config)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", log_file_path().display());
    Ok(true)
}
