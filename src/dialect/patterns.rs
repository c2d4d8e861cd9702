//! # Assignment Patterns
//!
//! Regex patterns recognising a variable assignment line in each dialect.
//!
//! Both patterns tolerate leading whitespace and capture the name and the raw
//! (still quoted) value. Lines that match neither are skipped by the parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches `export NAME=value` (zsh, bash)
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw value (everything after `=`)
    pub static ref EXPORT_RE: Regex = Regex::new(
        r#"^\s*export\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$"#
    ).unwrap();

    /// Matches `set [-gxUe]... NAME value` (fish)
    ///
    /// Captures:
    /// - Group 1: last flag group, if any
    /// - Group 2: variable name
    /// - Group 3: raw value
    pub static ref FISH_SET_RE: Regex = Regex::new(
        r#"^\s*set\s+(-[gxUe]+\s+)*([A-Za-z_][A-Za-z0-9_]*)\s+(.*)$"#
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_re() {
        let caps = EXPORT_RE.captures("export EDITOR=nvim").unwrap();
        assert_eq!(&caps[1], "EDITOR");
        assert_eq!(&caps[2], "nvim");
    }

    #[test]
    fn test_export_re_spaces_around_equals() {
        let caps = EXPORT_RE.captures("  export GOPATH = \"$HOME/go\"").unwrap();
        assert_eq!(&caps[1], "GOPATH");
        assert_eq!(&caps[2], "\"$HOME/go\"");
    }

    #[test]
    fn test_export_re_rejects_plain_assignment() {
        assert!(EXPORT_RE.captures("FOO=bar").is_none());
        assert!(EXPORT_RE.captures("export 9X=1").is_none());
    }

    #[test]
    fn test_fish_set_re() {
        let caps = FISH_SET_RE.captures("set -gx EDITOR nvim").unwrap();
        assert_eq!(&caps[2], "EDITOR");
        assert_eq!(&caps[3], "nvim");

        let caps = FISH_SET_RE.captures("set -g -x PATH /usr/bin /bin").unwrap();
        assert_eq!(&caps[2], "PATH");
        assert_eq!(&caps[3], "/usr/bin /bin");

        let caps = FISH_SET_RE.captures("set LANG en_US.UTF-8").unwrap();
        assert_eq!(&caps[2], "LANG");
    }

    #[test]
    fn test_fish_set_re_requires_value() {
        assert!(FISH_SET_RE.captures("set -e FOO").is_none());
    }
}
