//! Shell type detection and configuration paths

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Supported shell types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    Zsh,
    Bash,
    Fish,
}

impl ShellType {
    pub const ALL: [ShellType; 3] = [ShellType::Zsh, ShellType::Bash, ShellType::Fish];

    /// Detect shell type from `$SHELL`, falling back to zsh
    pub fn detect() -> Self {
        env::var("SHELL")
            .ok()
            .and_then(|shell| Self::from_shell_path(&shell))
            .unwrap_or(ShellType::Zsh)
    }

    fn from_shell_path(shell: &str) -> Option<Self> {
        if shell.contains("zsh") {
            Some(ShellType::Zsh)
        } else if shell.contains("bash") {
            Some(ShellType::Bash)
        } else if shell.contains("fish") {
            Some(ShellType::Fish)
        } else {
            None
        }
    }

    /// Detect shell type from a configuration file name
    pub fn detect_from_file(path: &Path) -> Option<Self> {
        let filename = path.file_name().and_then(|n| n.to_str())?;
        if filename.starts_with(".z") || filename.contains("zshrc") {
            return Some(ShellType::Zsh);
        }
        if filename.contains("bash") || filename == ".profile" {
            return Some(ShellType::Bash);
        }
        if path.extension().map(|e| e == "fish").unwrap_or(false) {
            return Some(ShellType::Fish);
        }
        None
    }

    /// Candidate startup files for this shell, primary first
    pub fn config_files(&self) -> Vec<PathBuf> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        match self {
            ShellType::Zsh => vec![
                home.join(".zshrc"),
                home.join(".zshenv"),
                home.join(".zprofile"),
            ],
            ShellType::Bash => vec![
                home.join(".bashrc"),
                home.join(".bash_profile"),
                home.join(".profile"),
            ],
            ShellType::Fish => vec![home.join(".config").join("fish").join("config.fish")],
        }
    }

    /// Get the default configuration file path for this shell
    pub fn default_config_path(&self) -> PathBuf {
        self.config_files()
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(self.name()))
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Zsh => "zsh",
            ShellType::Bash => "bash",
            ShellType::Fish => "fish",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShellType::Zsh => "Zsh",
            ShellType::Bash => "Bash",
            ShellType::Fish => "Fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zsh" => Ok(ShellType::Zsh),
            "bash" => Ok(ShellType::Bash),
            "fish" => Ok(ShellType::Fish),
            _ => Err(format!("Unknown shell type: {}", s)),
        }
    }
}
