//! Environment variable records

use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Names whose values are colon-separated directory lists
pub const PATH_LIKE_NAMES: [&str; 3] = ["PATH", "MANPATH", "INFOPATH"];

/// Opaque, stable identity of a variable during an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(Uuid);

impl VariableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VariableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a variable was found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
}

impl Origin {
    pub fn new(path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

/// Whether a variable is editable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Defined in the loaded configuration file
    User,
    /// Inherited from the process environment, read-only
    System,
}

/// A single environment variable definition
///
/// # Field Semantics
/// - `id`: identity that survives edits; equality and hashing use it alone
/// - `value`: unquoted value. Path-like fish lists are joined with `:`
/// - `origin`: absent for variables staged but not yet written
///
/// Loaded variables are never mutated in place. An edit is a new value
/// object carrying the same `id`, see [`Variable::with_value`].
#[derive(Debug, Clone)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    pub value: String,
    pub origin: Option<Origin>,
    pub provenance: Provenance,
}

impl Variable {
    /// A new user variable with no origin
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: VariableId::new(),
            name: name.into(),
            value: value.into(),
            origin: None,
            provenance: Provenance::User,
        }
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Same identity and origin, new value
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        self.origin.as_ref().map(|o| o.line)
    }

    pub fn is_system(&self) -> bool {
        self.provenance == Provenance::System
    }

    pub fn is_path_like(&self) -> bool {
        is_path_like(&self.name)
    }

    /// Colon-separated components of the value, empty segments dropped
    pub fn path_components(&self) -> Vec<&str> {
        self.value.split(':').filter(|s| !s.is_empty()).collect()
    }

    /// Check a name against `^[A-Za-z_][A-Za-z0-9_]*$`
    pub fn validate_name(name: &str) -> bool {
        NAME_RE.is_match(name)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

pub fn is_path_like(name: &str) -> bool {
    PATH_LIKE_NAMES.contains(&name)
}
