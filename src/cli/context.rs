//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::backup::BackupStore;
use crate::cli::args::Cli;
use crate::model::{Config, ShellType};
use crate::session::EditSession;
use crate::utils::path::normalize_path;
use crate::utils::shell_detect::get_shell_type;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub config_file: PathBuf,
    pub assume_yes: bool,
    pub dry_run: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;

        let provided_path = cli
            .file
            .as_ref()
            .map(|p| normalize_path(&p.to_string_lossy()));
        let shell_type = get_shell_type(
            cli.shell.map(|s| s.into()),
            provided_path.as_deref(),
            config.shell.default,
        );
        let config_file = provided_path.unwrap_or_else(|| shell_type.default_config_path());

        Ok(Self {
            config,
            shell_type,
            config_file,
            assume_yes: cli.yes,
            dry_run: cli.dry_run,
        })
    }

    pub fn backup_store(&self) -> BackupStore {
        BackupStore::from_config(&self.config)
    }

    /// Start a session with the configuration file loaded
    pub fn load_session(&self) -> Result<EditSession> {
        let mut session = EditSession::new(self.backup_store());
        session
            .load(&self.config_file, self.shell_type)
            .with_context(|| format!("Failed to load {}", self.config_file.display()))?;
        Ok(session)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' or open a new shell to apply changes", reload_cmd).dimmed()
        );
    }
}
