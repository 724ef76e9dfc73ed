//! File logging setup.
//!
//! Library code logs through the `log` facade; this module wires a `fern`
//! dispatcher to a log file when logging is enabled in the configuration.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use crate::config::{Config, LoggingConfig};
use crate::constants::LOG_FILE_NAME;

/// Install the global logger described by `config`.
///
/// Returns `Ok(false)` without installing anything when logging is disabled.
/// Calling this twice fails because `log` only accepts one global logger.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    build_dispatch(config.level_filter()?)
        .chain(file)
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(true)
}

/// The formatted dispatcher without any output attached.
pub fn build_dispatch(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // sqlx and hyper are chatty at debug
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
}

/// Location of the log file inside the platform data directory.
pub fn get_log_file_path() -> Result<PathBuf> {
    Ok(Config::get_data_dir()?.join(LOG_FILE_NAME))
}
