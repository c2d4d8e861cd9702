//! # Shell Dialects
//!
//! Per-shell syntax rules used by the parser and the writer.
//!
//! ```text
//! dialect/
//! ├── mod.rs       - Dialect trait + get_dialect factory + quote helpers
//! ├── patterns.rs  - Assignment regexes (EXPORT_RE, FISH_SET_RE)
//! ├── posix.rs     - zsh/bash: `export NAME=value`
//! └── fish.rs      - fish: `set -gx NAME value`
//! ```
//!
//! ## Quoting
//!
//! Formatting is deliberately lossy: a value that was single-quoted on disk is
//! written back double-quoted or bare. See [`PosixDialect`].

mod fish;
pub mod patterns;
mod posix;

pub use fish::FishDialect;
pub use posix::PosixDialect;

use crate::model::ShellType;

/// Separator used when presenting list values for editing
pub const LIST_SEPARATOR: char = ':';

/// Comment marker shared by every supported shell
pub const COMMENT_MARKER: &str = "#";

/// Syntax rules for one shell family.
pub trait Dialect: Send + Sync {
    /// Match an assignment line, returning `(name, raw_value)`.
    fn match_assignment<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)>;

    /// Turn a raw on-disk value into the unquoted editing form.
    fn normalize_value(&self, _name: &str, raw: &str) -> String {
        strip_quotes(raw)
    }

    /// Render a complete assignment line (no trailing newline).
    fn format_assignment(&self, name: &str, value: &str) -> String;

    /// Initial content for a configuration file that does not exist yet.
    fn header(&self) -> String;

    fn shell_type(&self) -> ShellType;

    fn list_separator(&self) -> char {
        LIST_SEPARATOR
    }

    fn comment_marker(&self) -> &'static str {
        COMMENT_MARKER
    }
}

/// Get the dialect for a shell type.
pub fn get_dialect(shell_type: ShellType) -> Box<dyn Dialect> {
    match shell_type {
        ShellType::Zsh | ShellType::Bash => Box::new(PosixDialect::new(shell_type)),
        ShellType::Fish => Box::new(FishDialect::new()),
    }
}

/// Strip one layer of matching surrounding quotes (double or single).
///
/// Surrounding whitespace is trimmed first. A lone quote character is left
/// untouched.
pub fn strip_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_double() {
        assert_eq!(strip_quotes("\"hello world\""), "hello world");
    }

    #[test]
    fn test_strip_quotes_single() {
        assert_eq!(strip_quotes("'$HOME/bin'"), "$HOME/bin");
    }

    #[test]
    fn test_strip_quotes_only_one_layer() {
        assert_eq!(strip_quotes("\"'x'\""), "'x'");
    }

    #[test]
    fn test_strip_quotes_mismatched_or_short() {
        assert_eq!(strip_quotes("\"abc'"), "\"abc'");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("  bare  "), "bare");
    }

    #[test]
    fn test_get_dialect_shell_types() {
        for shell in ShellType::ALL {
            assert_eq!(get_dialect(shell).shell_type(), shell);
            assert_eq!(get_dialect(shell).list_separator(), ':');
        }
    }
}
