//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up hvstats CLI defaults.

use crate::config::{Config, DEFAULT_RANGES_PATH};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `ranges` - Optional range table path to set as default
/// * `show` - If true, show current configuration
pub fn handle(ranges: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = ranges {
        set_ranges_path(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.get_ranges_path() {
        Some(path) => println!("Range table: {}", path.display()),
        None => println!("Range table: {} (default)", DEFAULT_RANGES_PATH),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Set the range table path in configuration
fn set_ranges_path(config: &mut Config, path: PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!("Range table {} does not exist yet", path.display());
    }

    config.set_ranges_path(path.clone());
    config.save()?;

    println!("Range table configured: {}", path.display());
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: hvstats configure --ranges PATH");
    println!("   or: hvstats configure --show");
    println!();
    println!("Note: --ranges on infer/explain and HVSTATS_RANGES override this.");
}
