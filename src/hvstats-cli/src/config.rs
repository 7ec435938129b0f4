//! Configuration management for hvstats CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Range table used when neither the flag, the environment nor the config
/// names one
pub const DEFAULT_RANGES_PATH: &str = "share/ranges.json";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub ranges_path: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("hvstats");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn get_ranges_path(&self) -> Option<&Path> {
        self.ranges_path.as_deref()
    }

    pub fn set_ranges_path(&mut self, path: PathBuf) {
        self.ranges_path = Some(path);
    }
}

/// Pick the range table: explicit flag (or `HVSTATS_RANGES`), then the
/// configured path, then the bundled default
pub fn resolve_ranges_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let config = Config::load()?;
    Ok(config.ranges_path.unwrap_or_else(|| PathBuf::from(DEFAULT_RANGES_PATH)))
}
