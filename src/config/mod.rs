//! Configuration module for recipients
//!
//! Configuration is stored as TOML in the user's config directory and read
//! through the `config` crate. Command-line flags override what is stored.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Color theme for the interactive field
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light text on a dark terminal
    #[default]
    Dark,
    /// Dark text on a light terminal
    Light,
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => f.write_str("dark"),
            Self::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ConfigError::Message(format!(
                "Invalid theme '{other}'. Use 'dark' or 'light'"
            ))),
        }
    }
}

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &["quiet", "theme", "candidates", "log_file"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RecipientsConfig {
    /// Candidate list used instead of the bundled one
    #[serde(default)]
    pub candidates: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Write diagnostic logs to this file
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Color theme for the interactive field
    #[serde(default)]
    pub theme: ThemeName,
}

impl RecipientsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("recipients").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing the defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Read one setting as text
    ///
    /// Unset paths read as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let display = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "theme" => Ok(self.theme.to_string()),
            "candidates" => Ok(display(&self.candidates)),
            "log_file" => Ok(display(&self.log_file)),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Update one setting from text
    ///
    /// An empty value clears a path setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that doesn't parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let path = |value: &str| (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "theme" => self.theme = value.parse()?,
            "candidates" => self.candidates = path(value),
            "log_file" => self.log_file = path(value),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
