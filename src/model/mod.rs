//! Core data models for envedit

mod config;
mod shell;
mod shell_config;
mod variable;

pub use config::{BackupConfig, Config, ShellSection, UiConfig};
pub use shell::ShellType;
pub use shell_config::ShellConfig;
pub use variable::{is_path_like, Origin, Provenance, Variable, VariableId, PATH_LIKE_NAMES};
