//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envedit")]
#[command(about = "Edit environment variables in shell startup files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to edit (defaults to the shell's primary startup file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell dialect
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Write without asking for confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show the preview only, do not write
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List variables defined in the configuration file
    #[command(visible_alias = "ls")]
    List {
        /// Also list the process environment
        #[arg(long)]
        system: bool,
    },

    /// Add or change a variable (NAME=VALUE)
    Set {
        /// NAME=VALUE
        definition: String,
    },

    /// Remove every definition of a variable
    #[command(visible_alias = "rm")]
    Unset {
        /// Variable name
        name: String,
    },

    /// Edit a PATH-like variable segment by segment
    Path {
        /// Variable to edit
        #[arg(long, default_value = "PATH")]
        name: String,

        #[command(subcommand)]
        path_command: PathCommands,
    },

    /// Check for duplicate definitions and missing directories
    Check,

    /// Show the process environment (read-only)
    Env,

    /// Create the configuration file if it does not exist
    Init,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },
}

/// Segment positions are 1-based, as shown by `path list`.
#[derive(Subcommand)]
pub enum PathCommands {
    /// Show segments
    List,
    /// Insert a directory (appends unless --at is given)
    Add {
        dir: String,
        /// Position to insert at
        #[arg(long)]
        at: Option<usize>,
    },
    /// Remove the segment at a position
    Remove { position: usize },
    /// Move segments starting at FROM so they land before TO
    Move {
        from: usize,
        to: usize,
        /// Number of segments to move
        #[arg(long, default_value = "1")]
        count: usize,
    },
    /// Remove repeated segments
    Dedup,
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups of the configuration file
    List {
        /// Include backups of every file
        #[arg(long)]
        all: bool,
    },
    /// Restore a backup over the configuration file
    Restore {
        /// Backup ID (file name, or a unique part of it)
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Zsh,
    Bash,
    Fish,
}

impl From<ShellArg> for crate::model::ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Zsh => crate::model::ShellType::Zsh,
            ShellArg::Bash => crate::model::ShellType::Bash,
            ShellArg::Fish => crate::model::ShellType::Fish,
        }
    }
}

/// Split `NAME=VALUE`, trimming one layer of quotes from the value
pub fn parse_definition(definition: &str) -> anyhow::Result<(String, String)> {
    let (name, value) = definition
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid format. Use: NAME=VALUE"))?;
    Ok((
        name.trim().to_string(),
        crate::dialect::strip_quotes(value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_definition() {
        assert_eq!(
            parse_definition("EDITOR=nvim").unwrap(),
            ("EDITOR".to_string(), "nvim".to_string())
        );
        assert_eq!(
            parse_definition("X='a=b c'").unwrap(),
            ("X".to_string(), "a=b c".to_string())
        );
        assert!(parse_definition("NOEQUALS").is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["envedit", "set", "A=1", "--shell", "fish", "-y"]).unwrap();
        assert!(cli.yes);
        assert!(matches!(cli.shell, Some(ShellArg::Fish)));
        assert!(matches!(cli.command, Commands::Set { .. }));
    }
}
