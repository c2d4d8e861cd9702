//! # Parser Module
//!
//! Extracts variable assignments from shell startup files.
//!
//! The parser is a best-effort extractor, not a shell interpreter:
//!
//! 1. Split the text on `\n`, keeping every line (line numbers are 1-based)
//! 2. Trim; skip blank lines and lines starting with `#`
//! 3. Match the dialect's assignment pattern; lines that do not match are skipped
//! 4. Normalize the raw value (one layer of quotes, fish path lists joined with `:`)
//!
//! Nothing here returns an error for malformed input. Identical text and shell
//! type always produce the same variables with the same line numbers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use envedit::model::ShellType;
//! use envedit::parser;
//!
//! let config = parser::parse_file(&ShellType::Zsh.default_config_path(), ShellType::Zsh)?;
//! for var in &config.variables {
//!     println!("{}={} (line {:?})", var.name, var.value, var.line_number());
//! }
//! ```

use std::path::Path;

use crate::dialect::{get_dialect, Dialect, COMMENT_MARKER};
use crate::error::{EditError, Result};
use crate::model::{Origin, Provenance, ShellConfig, ShellType, Variable};

/// Parse configuration text into an ordered list of variables.
pub fn parse(content: &str, shell_type: ShellType, file_path: &Path) -> Vec<Variable> {
    let dialect = get_dialect(shell_type);
    parse_with(content, dialect.as_ref(), file_path)
}

/// Parse using an explicit dialect.
pub fn parse_with(content: &str, dialect: &dyn Dialect, file_path: &Path) -> Vec<Variable> {
    let mut variables = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }

        match dialect.match_assignment(trimmed) {
            Some((name, raw)) => {
                let value = dialect.normalize_value(name, raw);
                variables.push(
                    Variable::new(name, value).with_origin(Origin::new(file_path, index + 1)),
                );
            }
            None => skipped += 1,
        }
    }

    tracing::debug!(
        path = %file_path.display(),
        shell = %dialect.shell_type(),
        matched = variables.len(),
        skipped,
        "parsed configuration"
    );

    variables
}

/// Read and parse a configuration file.
///
/// A missing file is not an error: it yields an empty snapshot that can be
/// written later.
pub fn parse_file(path: &Path, shell_type: ShellType) -> Result<ShellConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "configuration file missing, using empty snapshot");
        return Ok(ShellConfig::empty(shell_type, path));
    }

    let content = std::fs::read_to_string(path).map_err(|e| EditError::from_io(e, path))?;
    Ok(ShellConfig::from_content(shell_type, path, content))
}

/// The ambient process environment as read-only variables, sorted by name.
pub fn list_process_environment() -> Vec<Variable> {
    let mut variables: Vec<Variable> = std::env::vars_os()
        .map(|(name, value)| {
            Variable::new(
                name.to_string_lossy().to_string(),
                value.to_string_lossy().to_string(),
            )
            .with_provenance(Provenance::System)
        })
        .collect();

    variables.sort_by(|a, b| a.name.cmp(&b.name));
    variables
}
