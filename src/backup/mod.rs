//! Backup store
//!
//! One flat directory of verbatim copies named `<basename>_<timestamp>`.
//! There is no index file: the directory listing is the catalogue. Backups
//! are only ever added, never pruned.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use time::OffsetDateTime;

use crate::error::{EditError, Result};
use crate::model::Config;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
    pub size: u64,
    pub created: Option<SystemTime>,
}

impl BackupEntry {
    /// Whether this is a backup of a file with the given name
    pub fn is_backup_of(&self, basename: &str) -> bool {
        self.filename
            .strip_prefix(basename)
            .map(|rest| rest.starts_with('_'))
            .unwrap_or(false)
    }
}

/// Backup store rooted at a single directory
#[derive(Debug, Clone)]
pub struct BackupStore {
    backup_dir: PathBuf,
}

impl BackupStore {
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.backups_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Ensure backup directory exists
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir)
            .map_err(|e| EditError::from_io(e, &self.backup_dir))
    }

    /// Copy `source_file` verbatim into the store.
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());

        let stem = format!("{}_{}", filename, timestamp(OffsetDateTime::now_utc()));
        let mut backup_path = self.backup_dir.join(&stem);
        let mut suffix = 1;
        while backup_path.exists() {
            backup_path = self.backup_dir.join(format!("{}-{}", stem, suffix));
            suffix += 1;
        }

        std::fs::copy(source_file, &backup_path).map_err(|e| EditError::from_io(e, source_file))?;
        tracing::info!(
            source = %source_file.display(),
            backup = %backup_path.display(),
            "backup created"
        );

        Ok(backup_path)
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let read_dir =
            std::fs::read_dir(&self.backup_dir).map_err(|e| EditError::from_io(e, &self.backup_dir))?;

        for entry in read_dir {
            let entry = entry?;
            let path = entry.path();
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();
            if filename.starts_with('.') && !filename.contains('_') {
                continue;
            }

            let timestamp = filename
                .rsplit_once('_')
                .map(|(_, ts)| ts.to_string())
                .unwrap_or_default();

            entries.push(BackupEntry {
                id: filename.clone(),
                path,
                timestamp,
                filename,
                size: metadata.len(),
                created: metadata.created().or_else(|_| metadata.modified()).ok(),
            });
        }

        entries.sort_by(|a, b| {
            b.created
                .cmp(&a.created)
                .then_with(|| b.filename.cmp(&a.filename))
        });

        Ok(entries)
    }

    /// Backups taken of files named like `target`, newest first
    pub fn list_backups_for(&self, target: &Path) -> Result<Vec<BackupEntry>> {
        let basename = target
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(self
            .list_backups()?
            .into_iter()
            .filter(|b| b.is_backup_of(&basename))
            .collect())
    }

    /// Resolve a backup of `target` by id.
    ///
    /// An exact id wins. Otherwise `id` must be part of exactly one backup
    /// name; none or several matches are errors. Backups of other files are
    /// never considered.
    pub fn get_backup(&self, target: &Path, id: &str) -> Result<BackupEntry> {
        let mut candidates = self.list_backups_for(target)?;

        if let Some(index) = candidates.iter().position(|b| b.id == id) {
            return Ok(candidates.swap_remove(index));
        }

        candidates.retain(|b| b.filename.contains(id));
        match candidates.len() {
            0 => Err(EditError::BackupNotFound(id.to_string())),
            1 => Ok(candidates.remove(0)),
            matches => Err(EditError::AmbiguousBackup {
                id: id.to_string(),
                matches,
            }),
        }
    }

    /// Copy a backup over `target_file`.
    ///
    /// The current target is backed up first; if that fails nothing is
    /// overwritten. Returns the backup of the replaced file, if there was one.
    pub fn restore(&self, backup: &BackupEntry, target_file: &Path) -> Result<Option<PathBuf>> {
        let basename = target_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !backup.is_backup_of(&basename) {
            return Err(EditError::BackupMismatch {
                backup: backup.id.clone(),
                target: target_file.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(&backup.path).map_err(|e| EditError::from_io(e, &backup.path))?;

        let previous = crate::writer::commit(target_file, &content, self)?;
        tracing::info!(
            backup = %backup.path.display(),
            target = %target_file.display(),
            "backup restored"
        );
        Ok(previous)
    }
}

/// ISO 8601 UTC timestamp with `:` replaced by `-`
fn timestamp(now: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}-{:02}-{:02}Z",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
