//! zsh / bash dialect

use super::patterns::EXPORT_RE;
use super::Dialect;
use crate::model::ShellType;

/// `export NAME=value` syntax shared by zsh and bash.
///
/// Values containing a space or `$` are wrapped in double quotes, anything else
/// is written bare. Single quotes are never emitted.
pub struct PosixDialect {
    shell_type: ShellType,
}

impl PosixDialect {
    pub fn new(shell_type: ShellType) -> Self {
        Self { shell_type }
    }
}

impl Dialect for PosixDialect {
    fn match_assignment<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = EXPORT_RE.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    fn format_assignment(&self, name: &str, value: &str) -> String {
        if value.contains(' ') || value.contains('$') {
            format!("export {}=\"{}\"", name, value)
        } else {
            format!("export {}={}", name, value)
        }
    }

    fn header(&self) -> String {
        match self.shell_type {
            ShellType::Bash => "# ~/.bashrc - Bash configuration\n# Created by envedit\n\n".into(),
            _ => "# ~/.zshrc - Zsh configuration\n# Created by envedit\n\n".into(),
        }
    }

    fn shell_type(&self) -> ShellType {
        self.shell_type
    }
}
