//! Edit session: one loaded file plus its staged changes
//!
//! Every state change is an explicit call. Selecting another file or shell
//! means calling [`EditSession::load`] again, which also drops staged edits.

use std::path::{Path, PathBuf};

use crate::backup::{BackupEntry, BackupStore};
use crate::changeset::ChangeSet;
use crate::dialect::get_dialect;
use crate::error::{EditError, Result};
use crate::model::{ShellConfig, ShellType, Variable};
use crate::parser;
use crate::writer;

#[derive(Debug)]
pub struct EditSession {
    backups: BackupStore,
    config: Option<ShellConfig>,
    changes: ChangeSet,
    system: Vec<Variable>,
}

impl EditSession {
    pub fn new(backups: BackupStore) -> Self {
        Self {
            backups,
            config: None,
            changes: ChangeSet::new(),
            system: Vec::new(),
        }
    }

    /// Load a configuration file, discarding staged changes.
    pub fn load(&mut self, path: &Path, shell_type: ShellType) -> Result<&ShellConfig> {
        let config = parser::parse_file(path, shell_type)?;
        tracing::debug!(
            path = %path.display(),
            variables = config.variables.len(),
            "loaded configuration"
        );
        self.system = parser::list_process_environment();
        self.changes.reset();
        Ok(&*self.config.insert(config))
    }

    /// Load the same file again
    pub fn reload(&mut self) -> Result<()> {
        let (path, shell_type) = {
            let config = self.loaded()?;
            (config.file_path.clone(), config.shell_type)
        };
        self.load(&path, shell_type)?;
        Ok(())
    }

    pub fn config(&self) -> Option<&ShellConfig> {
        self.config.as_ref()
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    pub fn has_unsaved_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// User variables with every staged operation applied
    pub fn variables(&self) -> Vec<Variable> {
        match &self.config {
            Some(config) => self.changes.apply_to(&config.variables),
            None => Vec::new(),
        }
    }

    /// Process environment captured at load time
    pub fn system_variables(&self) -> &[Variable] {
        &self.system
    }

    /// First visible variable with this name
    pub fn find_by_name(&self, name: &str) -> Option<Variable> {
        self.variables().into_iter().find(|v| v.name == name)
    }

    /// Every visible variable with this name
    pub fn find_all_by_name(&self, name: &str) -> Vec<Variable> {
        self.variables()
            .into_iter()
            .filter(|v| v.name == name)
            .collect()
    }

    pub fn stage_add(&mut self, variable: Variable) -> Result<Variable> {
        self.loaded()?;
        let visible = self.variables();
        self.changes.stage_add(variable, &visible)
    }

    pub fn stage_update(&mut self, variable: Variable) -> Result<()> {
        self.ensure_visible(&variable)?;
        self.changes.stage_update(variable)
    }

    pub fn stage_delete(&mut self, variable: &Variable) -> Result<()> {
        self.ensure_visible(variable)?;
        self.changes.stage_delete(variable)
    }

    /// Drop staged changes without reloading
    pub fn discard_changes(&mut self) {
        self.changes.reset();
    }

    /// Text of the loaded file as it is on disk now, empty if it is missing.
    pub fn current_content(&self) -> Result<String> {
        let path = &self.loaded()?.file_path;
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(EditError::from_io(e, path)),
        }
    }

    /// Text that [`EditSession::save`] would write.
    ///
    /// Renders against the file as it is on disk, so origins made stale by an
    /// outside edit fail with [`EditError::InvalidLineNumber`].
    pub fn preview(&self) -> Result<String> {
        let config = self.loaded()?;
        let dialect = get_dialect(config.shell_type);
        let base = if config.file_path.exists() {
            self.current_content()?
        } else {
            dialect.header()
        };
        writer::render(&base, &self.changes, dialect.as_ref())
    }

    /// Render, back up, write and reload. Returns the backup taken, if any.
    pub fn save(&mut self) -> Result<Option<PathBuf>> {
        let content = self.preview()?;
        let path = self.loaded()?.file_path.clone();

        let backup = writer::commit(&path, &content, &self.backups)?;
        self.reload()?;
        Ok(backup)
    }

    /// Put a backup in place of the loaded file and reload it.
    ///
    /// Only backups taken of a file with the loaded file's name are accepted.
    pub fn restore(&mut self, backup: &BackupEntry) -> Result<Option<PathBuf>> {
        let path = self.loaded()?.file_path.clone();
        let previous = self.backups.restore(backup, &path)?;
        self.reload()?;
        Ok(previous)
    }

    fn loaded(&self) -> Result<&ShellConfig> {
        self.config.as_ref().ok_or(EditError::NoConfigurationLoaded)
    }

    fn ensure_visible(&self, variable: &Variable) -> Result<()> {
        self.loaded()?;
        if self.variables().iter().any(|v| v.id == variable.id) {
            Ok(())
        } else {
            Err(EditError::VariableNotFound {
                name: variable.name.clone(),
            })
        }
    }
}
