//! Error types for the edit engine

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised by staging, rendering and committing configuration edits.
///
/// Parse-time anomalies never show up here: the parser skips lines it does
/// not understand.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("No configuration loaded")]
    NoConfigurationLoaded,

    #[error("Invalid line number {line} in configuration file ({line_count} lines)")]
    InvalidLineNumber { line: usize, line_count: usize },

    #[error("Variable not found in configuration file: {name}")]
    VariableNotFound { name: String },

    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Permission denied to modify: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Invalid variable name: '{0}'")]
    InvalidName(String),

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Backup not found: {0}")]
    BackupNotFound(String),

    #[error("Backup id '{id}' is ambiguous ({matches} backups match)")]
    AmbiguousBackup { id: String, matches: usize },

    #[error("Backup {backup} is not a backup of {}", .target.display())]
    BackupMismatch { backup: String, target: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl EditError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => EditError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => EditError::PermissionDenied(path.to_path_buf()),
            _ => EditError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, EditError>;
