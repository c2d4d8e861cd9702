//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ShellType;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub shell: ShellSection,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UiConfig {
    /// Include the process environment in listings
    #[serde(default)]
    pub show_system: bool,
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BackupConfig {
    /// Override for the backup directory
    pub dir: Option<PathBuf>,
}

/// Shell selection defaults
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ShellSection {
    pub default: Option<ShellType>,
}

impl Config {
    /// Get the envedit configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("envedit")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Backup directory, honouring the `[backup] dir` override
    pub fn backups_dir(&self) -> PathBuf {
        self.backup
            .dir
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("backups"))
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.ui.show_system);
        assert!(config.backup.dir.is_none());
        assert!(config.shell.default.is_none());
        assert!(config.backups_dir().ends_with("envedit/backups"));
    }

    #[test]
    fn test_config_parse_sections() {
        let config: Config = toml::from_str(
            r#"
[ui]
show_system = true

[backup]
dir = "/tmp/envedit-backups"

[shell]
default = "fish"
"#,
        )
        .unwrap();
        assert!(config.ui.show_system);
        assert_eq!(config.backups_dir(), PathBuf::from("/tmp/envedit-backups"));
        assert_eq!(config.shell.default, Some(ShellType::Fish));
    }

    #[test]
    fn test_config_partial_file() {
        let config: Config = toml::from_str("[ui]\nshow_system = true\n").unwrap();
        assert!(config.ui.show_system);
        assert!(config.shell.default.is_none());
    }
}
