//! Configuration handling for FarmTech
//!
//! Configuration is read from `farmtech.toml` in the working directory,
//! falling back to `~/.config/farmtech/config.toml` (global). Every key is
//! optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::export::{CsvExporter, DEFAULT_EXPORT_FILE};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "farmtech.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// CSV export settings.
///
/// Only the destination is configurable; the file is always
/// comma-separated and starts with a byte-order mark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Destination file, relative to the working directory
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl ExportConfig {
    /// Builds the exporter described by this section
    pub fn exporter(&self) -> CsvExporter {
        CsvExporter::new(&self.path)
    }
}

/// Listing settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places shown for areas and quantities
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

/// Combined configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Loads configuration from the first location that exists.
    ///
    /// An explicit path must exist; otherwise the local file, then the
    /// global one, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load_file(&local);
        }

        match Self::global_config_dir() {
            Some(dir) if dir.join("config.toml").is_file() => Self::load_file(&dir.join("config.toml")),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "farmtech", "farmtech").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads and validates a single config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }
}
