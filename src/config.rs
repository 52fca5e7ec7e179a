//! Configuration file handling.
//!
//! This module provides loading and saving of chromhelper configuration
//! from a TOML file.
//!
//! # Configuration Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/chromhelper/config.toml`
//! - macOS: `~/Library/Application Support/chromhelper/config.toml`
//! - Windows: `%APPDATA%\chromhelper\config.toml`
//!
//! # Example Configuration
//!
//! ```toml
//! data_dir = "/Users/ada/Library/Application Support/Google/Chrome"
//! failure_policy = "abort"
//! default_format = "json"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform::current_user_data_dir;
use crate::scanner::FailurePolicy;

/// Application configuration.
///
/// Every key is optional; missing keys take their default values.
///
/// # Example
///
/// ```no_run
/// use chromhelper::Config;
///
/// // Load from file (or use defaults if file doesn't exist)
/// let config = Config::load().unwrap();
///
/// println!("Failure policy: {:?}", config.failure_policy);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chrome user-data directory to scan instead of the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// What to do when a profile or extension cannot be read.
    ///
    /// Valid values: "skip", "abort"
    /// Default: "skip"
    pub failure_policy: FailurePolicy,

    /// Default output format when no `--format` flag is provided.
    ///
    /// Valid values: "table", "json"
    /// Default: "table"
    pub default_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            failure_policy: FailurePolicy::default(),
            default_format: "table".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the config file.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path, with the same defaulting as
    /// [`load`](Self::load).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the config file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// # Example
    ///
    /// ```
    /// use chromhelper::Config;
    ///
    /// let path = Config::config_path();
    /// println!("Config file: {}", path.display());
    /// ```
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chromhelper")
            .join("config.toml")
    }

    /// The Chrome data root to scan: `data_dir` when set, otherwise the
    /// platform location for the current user.
    ///
    /// # Errors
    ///
    /// Fails when no `data_dir` is configured and the platform has no known
    /// Chrome location.
    pub fn data_root(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(current_user_data_dir()?),
        }
    }

    /// Generates a string containing the default configuration.
    pub fn generate_default_config() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}
