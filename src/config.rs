//! Configuration management for Starshelf
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DATABASE_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_STORAGE_KEY,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Remote metadata source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the GitHub REST API (no trailing `/repos`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

/// What to do when the stored bookmark list cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Surface the corruption as an error
    #[default]
    Fail,
    /// Log a warning and start from an empty list
    Reset,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file. Empty means the platform data directory.
    pub database_path: String,
    /// Key under which the bookmark list is stored
    pub key: String,
    /// Behavior when the stored list is unreadable
    pub on_corrupt: CorruptPolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("starshelf/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: String::new(),
            key: DEFAULT_STORAGE_KEY.to_string(),
            on_corrupt: CorruptPolicy::Fail,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl StorageConfig {
    /// Resolve the database file, falling back to the platform data directory
    pub fn resolve_database_path(&self) -> Result<PathBuf> {
        if !self.database_path.is_empty() {
            return Ok(PathBuf::from(&self.database_path));
        }
        Ok(Config::get_data_dir()?.join(DATABASE_FILE_NAME))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("api.base_url must start with http:// or https://, got '{}'", self.api.base_url);
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        if self.api.user_agent.trim().is_empty() {
            anyhow::bail!("api.user_agent cannot be empty");
        }

        if self.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Starshelf Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Get the platform data directory used for the database and log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
