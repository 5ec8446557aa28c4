//! Configuration management for Swipelist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_ACTION_WIDTH, DEFAULT_ROW_COUNT, DEFAULT_SETTLE_STEP,
    DEFAULT_SWIPE_THRESHOLD, MAX_ACTION_WIDTH, MAX_ROW_COUNT, MIN_ACTION_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a configuration file is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("action_width must be between {min} and {max} columns, got {got}")]
    ActionWidth { min: u16, max: u16, got: u16 },
    #[error("threshold must be strictly between 0 and 1, got {0}")]
    Threshold(f32),
    #[error("settle_step must be positive, got {0}")]
    SettleStep(f32),
    #[error("row_count must be between 1 and {max}, got {got}")]
    RowCount { max: usize, got: usize },
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub swipe: SwipeConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (dragging needs it)
    pub mouse_enabled: bool,
    /// Number of rows in the list
    pub row_count: usize,
    /// Glyph set for the action icons
    pub icon_theme: IconTheme,
}

/// Swipe gesture configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwipeConfig {
    /// Width of each action area in columns; the card travels at most this far
    pub action_width: u16,
    /// Fraction of the anchor distance a release must exceed to change anchor
    pub threshold: f32,
    /// Columns per tick for the settle animation
    pub settle_step: f32,
    /// Close a row once its confirmation dialog is submitted
    pub reset_after_dialog: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written ("error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            row_count: DEFAULT_ROW_COUNT,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            action_width: DEFAULT_ACTION_WIDTH,
            threshold: DEFAULT_SWIPE_THRESHOLD,
            settle_step: DEFAULT_SETTLE_STEP,
            reset_after_dialog: false,
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
    /// Parse the configured level into a `log` filter
    pub fn level_filter(&self) -> std::result::Result<log::LevelFilter, ConfigError> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let width = self.swipe.action_width;
        if !(MIN_ACTION_WIDTH..=MAX_ACTION_WIDTH).contains(&width) {
            return Err(ConfigError::ActionWidth {
                min: MIN_ACTION_WIDTH,
                max: MAX_ACTION_WIDTH,
                got: width,
            });
        }

        let threshold = self.swipe.threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold >= 1.0 {
            return Err(ConfigError::Threshold(threshold));
        }

        if self.swipe.settle_step.is_nan() || self.swipe.settle_step <= 0.0 {
            return Err(ConfigError::SettleStep(self.swipe.settle_step));
        }

        if self.ui.row_count == 0 || self.ui.row_count > MAX_ROW_COUNT {
            return Err(ConfigError::RowCount {
                max: MAX_ROW_COUNT,
                got: self.ui.row_count,
            });
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Swipelist Configuration File\n# Generated on {}\n\n",
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
}
