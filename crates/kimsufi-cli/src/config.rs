use crate::display::DisplayFormat;
use crate::{CliError, Result};
use kimsufi_core::PriceConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding `price.duration`
pub const ENV_PRICE_DURATION: &str = "KIMSUFI_PRICE_DURATION";

/// Environment variable overriding `price.pricing_mode`
pub const ENV_PRICING_MODE: &str = "KIMSUFI_PRICING_MODE";

/// Configuration-specific errors that can occur during config operations
///
/// # Variants
/// * `UnknownKey` - The key is not one of the supported `section.name` keys
/// * `InvalidValue` - A configuration value is invalid for its field
/// * `DirectoryCreationFailed` - Failed to create the config directory
/// * `TomlError` - Error parsing or serializing TOML data
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config directory creation failed: {0}")]
    DirectoryCreationFailed(String),

    #[error("TOML parsing error: {0}")]
    TomlError(String),
}

/// Price section: the billing configuration prices are compared under
///
/// # Fields
/// * `duration` - Optional billing duration, e.g. `P1M`
/// * `pricing_mode` - Optional pricing mode, e.g. `default`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceSection {
    pub duration: Option<String>,
    pub pricing_mode: Option<String>,
}

/// Display section
///
/// # Fields
/// * `format` - Optional output format: `table`, `plain` or `json`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisplaySection {
    pub format: Option<String>,
}

/// Main configuration structure containing all configuration sections
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigData {
    pub price: Option<PriceSection>,
    pub display: Option<DisplaySection>,
}

/// Configuration manager that handles loading, saving, and accessing configuration
///
/// # Fields
/// * `config_path` - Path to the configuration file
/// * `data` - The configuration data structure
#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf,
    pub data: ConfigData,
}

impl Config {
    /// Load the configuration from `~/.kimsufi/config.toml`, or defaults when
    /// the file does not exist yet
    ///
    /// # Errors
    /// * `ConfigError::DirectoryCreationFailed` - If the home directory cannot be found
    /// * `ConfigError::TomlError` - If TOML parsing fails
    /// * `CliError::Io` - If file operations fail
    pub fn new() -> Result<Self> {
        let config_path = get_config_dir()?.join("config.toml");
        Self::load_from(&config_path)
    }

    /// Load the configuration from an explicit path
    ///
    /// # Arguments
    /// * `config_path` - Path to the TOML file; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let data = if config_path.exists() {
            let content = fs::read_to_string(config_path).map_err(CliError::Io)?;
            toml::from_str(&content).map_err(|e| ConfigError::TomlError(e.to_string()))?
        } else {
            ConfigData::default()
        };

        Ok(Config {
            config_path: config_path.to_path_buf(),
            data,
        })
    }

    /// Save the configuration to file with an atomic write
    ///
    /// # Errors
    /// * `ConfigError::TomlError` - If TOML serialization fails
    /// * `ConfigError::DirectoryCreationFailed` - If directory creation fails
    /// * `CliError::Io` - If file operations fail
    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| ConfigError::TomlError(e.to_string()))?;

        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::DirectoryCreationFailed(e.to_string()))?;
            }
        }

        // Write to a temporary file first, then rename
        let temp_path = self.config_path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(CliError::Io)?;
        fs::rename(&temp_path, &self.config_path).map_err(CliError::Io)?;

        Ok(())
    }

    /// Price configuration: environment first, then the file, then defaults
    pub fn price_config(&self) -> PriceConfig {
        self.price_config_with_env(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::price_config`] with an injectable environment lookup
    pub fn price_config_with_env<F>(&self, env: F) -> PriceConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PriceConfig::default();
        let section = self.data.price.clone().unwrap_or_default();

        let duration = env(ENV_PRICE_DURATION)
            .or(section.duration)
            .unwrap_or(defaults.duration);
        let pricing_mode = env(ENV_PRICING_MODE)
            .or(section.pricing_mode)
            .unwrap_or(defaults.pricing_mode);

        PriceConfig::new(duration, pricing_mode)
    }

    /// Configured display format, `table` when unset
    pub fn display_format(&self) -> Result<DisplayFormat> {
        match self.data.display.as_ref().and_then(|d| d.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(DisplayFormat::default()),
        }
    }

    /// Get a configuration value by `section.name` key
    ///
    /// # Returns
    /// * `Result<Option<String>>` - The value if set, None otherwise
    ///
    /// # Errors
    /// * `ConfigError::UnknownKey` - If the key is not supported
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let price = self.data.price.as_ref();
        let display = self.data.display.as_ref();

        match key {
            "price.duration" => Ok(price.and_then(|p| p.duration.clone())),
            "price.pricing_mode" => Ok(price.and_then(|p| p.pricing_mode.clone())),
            "display.format" => Ok(display.and_then(|d| d.format.clone())),
            _ => Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
    }

    /// Set a configuration value by `section.name` key
    ///
    /// # Errors
    /// * `ConfigError::UnknownKey` - If the key is not supported
    /// * `ConfigError::InvalidValue` - If the value is empty or not a valid format
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: key.to_string(),
                value: value.to_string(),
            }
            .into());
        }

        match key {
            "price.duration" => {
                self.data.price.get_or_insert_with(Default::default).duration =
                    Some(value.to_string())
            }
            "price.pricing_mode" => {
                self.data.price.get_or_insert_with(Default::default).pricing_mode =
                    Some(value.to_string())
            }
            "display.format" => {
                let format: DisplayFormat = value.parse()?;
                self.data.display.get_or_insert_with(Default::default).format =
                    Some(format.to_string())
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }

        Ok(())
    }

    /// Drop every configured value
    pub fn reset(&mut self) {
        self.data = ConfigData::default();
    }

    /// Show all configuration as a formatted string
    pub fn show_config(&self) -> String {
        toml::to_string_pretty(&self.data).unwrap_or_else(|_| "Error formatting config".to_string())
    }
}

/// Gets the path to the configuration directory (`~/.kimsufi/`).
///
/// # Errors
/// * `ConfigError::DirectoryCreationFailed` - If the home directory cannot be found
fn get_config_dir() -> Result<PathBuf> {
    let home_dir = home::home_dir().ok_or_else(|| {
        ConfigError::DirectoryCreationFailed("Could not find home directory".to_string())
    })?;

    Ok(home_dir.join(".kimsufi"))
}
