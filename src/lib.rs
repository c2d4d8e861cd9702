//! envedit - Environment variable editor for shell startup files
//!
//! Reads `export`/`set -gx` definitions out of zsh, bash and fish startup
//! files, stages edits in memory, previews the resulting file and writes it
//! back with a backup.
//!
//! # Pipeline
//!
//! ```text
//! path + shell ──parser──▶ ShellConfig ──stage──▶ ChangeSet
//!                                                   │
//!                 backup + atomic write ◀──writer::render
//! ```
//!
//! - Unrecognised lines are skipped, never reported as errors
//! - Deleted definitions are commented out, so line numbers stay stable
//! - Every write is preceded by a timestamped backup

pub mod backup;
pub mod changeset;
pub mod checker;
pub mod cli;
pub mod config;
pub mod dialect;
pub mod error;
pub mod model;
pub mod parser;
pub mod path_list;
pub mod preview;
pub mod session;
pub mod utils;
pub mod writer;

pub use changeset::ChangeSet;
pub use dialect::{get_dialect, Dialect};
pub use error::{EditError, Result};
pub use model::{Config, Origin, Provenance, ShellConfig, ShellType, Variable, VariableId};
pub use path_list::{PathListEditor, PathListEntry};
pub use session::EditSession;
