//! Loaded configuration file snapshot

use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use super::{ShellType, Variable};

/// A configuration file as loaded from disk.
///
/// `variables` is derived from `content`. Nothing keeps the two in sync
/// automatically: after changing `content`, call [`ShellConfig::refresh`]
/// or build a new snapshot.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub shell_type: ShellType,
    pub file_path: PathBuf,
    pub content: String,
    pub variables: Vec<Variable>,
    pub last_modified: Option<OffsetDateTime>,
}

impl ShellConfig {
    /// Build a snapshot from raw text, deriving the variable list.
    pub fn from_content(
        shell_type: ShellType,
        file_path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        let file_path = file_path.into();
        let content = content.into();
        let variables = crate::parser::parse(&content, shell_type, &file_path);
        let last_modified = probe_modified(&file_path);
        Self {
            shell_type,
            file_path,
            content,
            variables,
            last_modified,
        }
    }

    /// Empty snapshot for a file that does not exist yet
    pub fn empty(shell_type: ShellType, file_path: impl Into<PathBuf>) -> Self {
        Self::from_content(shell_type, file_path, String::new())
    }

    /// Re-derive `variables` from `content`
    pub fn refresh(&mut self) {
        self.variables = crate::parser::parse(&self.content, self.shell_type, &self.file_path);
        self.last_modified = probe_modified(&self.file_path);
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Path with the home directory shown as `~`
    pub fn display_path(&self) -> String {
        if let Some(home) = dirs::home_dir() {
            if let Ok(rest) = self.file_path.strip_prefix(&home) {
                return Path::new("~").join(rest).display().to_string();
            }
        }
        self.file_path.display().to_string()
    }
}

fn probe_modified(path: &Path) -> Option<OffsetDateTime> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(OffsetDateTime::from)
}
