//! Shell detection utilities

use crate::model::ShellType;
use std::path::Path;

/// Get the appropriate shell type for the current context
pub fn get_shell_type(
    specified: Option<ShellType>,
    file_path: Option<&Path>,
    configured: Option<ShellType>,
) -> ShellType {
    // Priority: specified > file detection > configured default > environment
    if let Some(shell) = specified {
        return shell;
    }

    if let Some(shell) = file_path.and_then(ShellType::detect_from_file) {
        return shell;
    }

    configured.unwrap_or_else(ShellType::detect)
}
