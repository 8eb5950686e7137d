//! Configuration management for strtools
//!
//! This module handles loading, parsing, and validation of configuration files
//! used by the command-line front end. The library helpers never read it;
//! they take every setting as an argument.

use crate::constants::{
    APP_DIR_NAME, CANONICAL_DATE_FORMAT, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DISPLAY_DATE_FORMAT,
    DEFAULT_ELLIPSIS, DEFAULT_TRUNCATE_LENGTH,
};
use crate::utils::date;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formatting: FormattingConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied when a subcommand argument is omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Maximum length used by `truncate`
    pub truncate_length: usize,
    /// Marker appended by `truncate`
    pub ellipsis: String,
    /// `strftime` pattern used by `from-canonical`
    pub display_date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write log records to a file
    pub enabled: bool,
    /// Minimum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            display_date_format: DEFAULT_DISPLAY_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse `level` into a filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
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
        let formatting = &self.formatting;

        if formatting.truncate_length == 0 {
            anyhow::bail!("truncate_length must be at least 1");
        }

        let ellipsis_len = formatting.ellipsis.chars().count();
        if ellipsis_len > formatting.truncate_length {
            anyhow::bail!(
                "ellipsis '{}' ({} chars) is longer than truncate_length {}",
                formatting.ellipsis,
                ellipsis_len,
                formatting.truncate_length
            );
        }

        if let Err(e) = date::validate_date_format(&formatting.display_date_format) {
            anyhow::bail!("Invalid display_date_format '{}': {}", formatting.display_date_format, e);
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
            "# strtools Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(CANONICAL_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
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
