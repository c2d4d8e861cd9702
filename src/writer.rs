//! Preview/apply pipeline: staged changes to file text, file text to disk

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backup::BackupStore;
use crate::changeset::ChangeSet;
use crate::dialect::{get_dialect, Dialect};
use crate::error::{EditError, Result};
use crate::model::{ShellType, Variable};

/// Trailing annotation on lines commented out by a deletion
pub const REMOVED_ANNOTATION: &str = "Removed by envedit";

/// Apply a change set to the original text.
///
/// Order is fixed: deletions, then updates, then additions. Deletions comment
/// lines out instead of removing them, so every original line number stays
/// valid for the whole pipeline. An empty change set returns the text as is.
pub fn render(original: &str, changes: &ChangeSet, dialect: &dyn Dialect) -> Result<String> {
    let mut content = original.to_string();

    for variable in changes.deletions() {
        content = delete_line(&content, variable, dialect)?;
    }
    for variable in changes.updates() {
        content = update_line(&content, variable, dialect)?;
    }
    for variable in changes.additions() {
        content = append_assignment(&content, variable, dialect);
    }

    Ok(content)
}

/// Comment out the line a variable was loaded from.
pub fn delete_line(content: &str, variable: &Variable, dialect: &dyn Dialect) -> Result<String> {
    let line_number = variable
        .line_number()
        .ok_or_else(|| EditError::VariableNotFound {
            name: variable.name.clone(),
        })?;

    replace_line(content, line_number, |line| {
        let marker = dialect.comment_marker();
        format!("{} {} {} {}", marker, line, marker, REMOVED_ANNOTATION)
    })
}

/// Replace the line a variable was loaded from with a fresh assignment.
pub fn update_line(content: &str, variable: &Variable, dialect: &dyn Dialect) -> Result<String> {
    let line_number = variable
        .line_number()
        .ok_or_else(|| EditError::VariableNotFound {
            name: variable.name.clone(),
        })?;

    replace_line(content, line_number, |_| {
        dialect.format_assignment(&variable.name, &variable.value)
    })
}

/// Append an assignment, making sure it starts on its own line.
///
/// A file whose first line ends in `\r\n` gets `\r\n` endings for the
/// appended text too.
pub fn append_assignment(content: &str, variable: &Variable, dialect: &dyn Dialect) -> String {
    let ending = line_ending(content);
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(ending);
    }
    out.push_str(&dialect.format_assignment(&variable.name, &variable.value));
    out.push_str(ending);
    out
}

fn line_ending(content: &str) -> &'static str {
    match content.split_once('\n') {
        Some((first, _)) if first.ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Rewrite one 1-based line, keeping a `\r` line ending if it had one.
fn replace_line(
    content: &str,
    line_number: usize,
    rewrite: impl FnOnce(&str) -> String,
) -> Result<String> {
    let mut lines: Vec<String> = content.split('\n').map(String::from).collect();
    let line_count = lines.len();

    if line_number == 0 || line_number > line_count {
        return Err(EditError::InvalidLineNumber {
            line: line_number,
            line_count,
        });
    }

    let original = &lines[line_number - 1];
    let (body, ending) = match original.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (original.as_str(), ""),
    };
    let rewritten = format!("{}{}", rewrite(body), ending);
    lines[line_number - 1] = rewritten;

    Ok(lines.join("\n"))
}

/// Write the dialect header if nothing exists at `path`.
///
/// Returns whether a file was created.
pub fn create_if_missing(path: &Path, shell_type: ShellType) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let header = get_dialect(shell_type).header();
    write_atomic(path, &header)?;
    tracing::info!(path = %path.display(), shell = %shell_type, "created configuration file");
    Ok(true)
}

/// Back up the current file (if any), then atomically replace it.
///
/// If the backup cannot be written the target is left untouched. Returns the
/// path of the backup that was taken.
pub fn commit(path: &Path, content: &str, backups: &BackupStore) -> Result<Option<PathBuf>> {
    let backup = if path.exists() {
        Some(backups.create_backup(path)?)
    } else {
        None
    };

    write_atomic(path, content)?;
    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        backup = ?backup,
        "committed configuration"
    );
    Ok(backup)
}

/// Write to a temp file in the destination directory, then rename over it.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| EditError::from_io(e, &dir))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| EditError::from_io(e, &dir))?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = std::fs::metadata(path) {
        std::fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(path)
        .map_err(|e| EditError::from_io(e.error, path))?;
    Ok(())
}
