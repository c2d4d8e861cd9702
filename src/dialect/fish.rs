//! fish dialect

use super::patterns::FISH_SET_RE;
use super::{strip_quotes, Dialect, LIST_SEPARATOR};
use crate::model::ShellType;

/// Variables fish stores as whitespace-separated token lists
const FISH_LIST_NAMES: [&str; 2] = ["PATH", "MANPATH"];

/// `set -gx NAME value` syntax.
///
/// fish keeps `PATH` as a list of tokens; the editing form joins them with `:`
/// so path lists look the same in every dialect. Values are written unquoted.
pub struct FishDialect;

impl FishDialect {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FishDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for FishDialect {
    fn match_assignment<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = FISH_SET_RE.captures(line)?;
        Some((caps.get(2)?.as_str(), caps.get(3)?.as_str()))
    }

    fn normalize_value(&self, name: &str, raw: &str) -> String {
        if FISH_LIST_NAMES.contains(&name) {
            split_tokens(raw)
                .iter()
                .map(|token| strip_quotes(token))
                .collect::<Vec<_>>()
                .join(&LIST_SEPARATOR.to_string())
        } else {
            strip_quotes(raw)
        }
    }

    fn format_assignment(&self, name: &str, value: &str) -> String {
        format!("set -gx {} {}", name, value)
    }

    fn header(&self) -> String {
        "# ~/.config/fish/config.fish - Fish configuration\n# Created by envedit\n\n".into()
    }

    fn shell_type(&self) -> ShellType {
        ShellType::Fish
    }
}

/// Split on whitespace outside of quotes, keeping the quotes in each token.
fn split_tokens(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
