//! Ordered-list view of PATH-like variables

use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

use crate::dialect::LIST_SEPARATOR;
use crate::error::{EditError, Result};
use crate::model::Variable;
use crate::utils::path::expand_tilde;

/// One segment of a list value.
///
/// `exists` is probed once when the entry is created and is only a hint for
/// display; missing directories are still valid segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathListEntry {
    pub path: String,
    pub exists: bool,
}

impl PathListEntry {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let exists = probe(&path);
        Self { path, exists }
    }
}

/// Editable sequence of path segments.
///
/// All operations only reorder the in-memory list. Serialize the result and
/// stage it as an update to persist it.
#[derive(Debug, Clone)]
pub struct PathListEditor {
    entries: Vec<PathListEntry>,
    separator: char,
}

impl PathListEditor {
    /// Split a list value on the editing separator, dropping empty segments
    pub fn from_value(value: &str) -> Self {
        Self::with_separator(value, LIST_SEPARATOR)
    }

    pub fn with_separator(value: &str, separator: char) -> Self {
        let entries = value
            .split(separator)
            .filter(|s| !s.is_empty())
            .map(PathListEntry::new)
            .collect();
        Self { entries, separator }
    }

    pub fn from_variable(variable: &Variable) -> Self {
        Self::from_value(&variable.value)
    }

    pub fn entries(&self) -> &[PathListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a segment before `index` (`index == len` appends)
    pub fn insert(&mut self, index: usize, path: impl Into<String>) -> Result<()> {
        if index > self.entries.len() {
            return Err(self.out_of_range(index));
        }
        self.entries.insert(index, PathListEntry::new(path));
        Ok(())
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(PathListEntry::new(path));
    }

    pub fn remove(&mut self, index: usize) -> Result<PathListEntry> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Move a contiguous range so it lands before `to`.
    ///
    /// `to` is an index into the list as it was before the move, the same
    /// convention list views use for drag and drop. `to` inside the range is
    /// a no-op.
    pub fn move_range(&mut self, range: Range<usize>, to: usize) -> Result<()> {
        let len = self.entries.len();
        if range.start > range.end || range.end > len {
            return Err(self.out_of_range(range.end));
        }
        if to > len {
            return Err(self.out_of_range(to));
        }
        if range.is_empty() || (to >= range.start && to <= range.end) {
            return Ok(());
        }

        let moved: Vec<PathListEntry> = self.entries.drain(range.clone()).collect();
        let dest = if to > range.end {
            to - moved.len()
        } else {
            to
        };
        self.entries.splice(dest..dest, moved);
        Ok(())
    }

    /// Remove repeated segments, keeping the first occurrence
    pub fn dedup(&mut self) -> usize {
        let before = self.entries.len();
        let mut seen = HashSet::new();
        self.entries.retain(|e| seen.insert(e.path.clone()));
        before - self.entries.len()
    }

    /// Indices of segments that did not exist when probed
    pub fn missing(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.exists)
            .map(|(i, _)| i)
            .collect()
    }

    /// Join the segments with the separator, in current order
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.path.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator.to_string())
    }

    /// New value object for `variable` carrying the edited list
    pub fn to_variable(&self, variable: &Variable) -> Variable {
        variable.with_value(self.serialize())
    }

    fn out_of_range(&self, index: usize) -> EditError {
        EditError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}

/// Existence check with `~` expanded; segments with `$` references are not
/// resolved and count as missing.
fn probe(path: &str) -> bool {
    if path.contains('$') {
        return false;
    }
    Path::new(&expand_tilde(path)).exists()
}
