//! Configuration management module

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::model::Config;

/// Ensure the configuration directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = Config::config_dir();
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;
    Ok(config_dir)
}

/// Load the configuration file, falling back to defaults when it is absent
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();
    if config_path.exists() {
        Config::load().with_context(|| format!("Failed to read {}", config_path.display()))
    } else {
        Ok(Config::default())
    }
}

/// Save configuration
pub fn save_config(config: &Config) -> Result<()> {
    ensure_config_dir()?;
    config.save()
}
