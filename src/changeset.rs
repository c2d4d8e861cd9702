//! Staged edits that have not been written yet

use crate::error::{EditError, Result};
use crate::model::{Provenance, Variable, VariableId};

/// Staged additions, updates and deletions, keyed by variable identity.
///
/// An identity lives in at most one of the three categories. A variable that
/// was added in this session stays an addition when edited again, since it
/// has no line on disk to update. Each category keeps staging order so that
/// rendering is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    additions: Vec<Variable>,
    updates: Vec<Variable>,
    deletions: Vec<Variable>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new variable against the visible variable list.
    ///
    /// When a visible variable already has the same name, the request becomes
    /// an edit of that variable: its identity and origin are kept and only the
    /// value changes. Returns the variable as staged.
    pub fn stage_add(&mut self, variable: Variable, visible: &[Variable]) -> Result<Variable> {
        if !Variable::validate_name(&variable.name) {
            return Err(EditError::InvalidName(variable.name));
        }

        if let Some(existing) = visible.iter().find(|v| v.name == variable.name) {
            let staged = existing.with_value(variable.value);
            if let Some(slot) = find_mut(&mut self.additions, staged.id) {
                *slot = staged.clone();
            } else {
                self.deletions.retain(|v| v.id != staged.id);
                upsert(&mut self.updates, staged.clone());
            }
            tracing::debug!(name = %staged.name, "staged add reclassified as update");
            return Ok(staged);
        }

        let staged = Variable {
            origin: None,
            provenance: Provenance::User,
            ..variable
        };
        upsert(&mut self.additions, staged.clone());
        tracing::debug!(name = %staged.name, "staged addition");
        Ok(staged)
    }

    /// Stage a new value for an existing variable.
    pub fn stage_update(&mut self, variable: Variable) -> Result<()> {
        if let Some(slot) = find_mut(&mut self.additions, variable.id) {
            *slot = variable;
            return Ok(());
        }

        if variable.origin.is_none() {
            return Err(EditError::VariableNotFound {
                name: variable.name,
            });
        }

        tracing::debug!(name = %variable.name, line = ?variable.line_number(), "staged update");
        self.deletions.retain(|v| v.id != variable.id);
        upsert(&mut self.updates, variable);
        Ok(())
    }

    /// Stage removal of a variable.
    ///
    /// Unwritten additions are simply discarded. Anything else needs an origin
    /// to comment out.
    pub fn stage_delete(&mut self, variable: &Variable) -> Result<()> {
        if self.additions.iter().any(|v| v.id == variable.id) {
            self.additions.retain(|v| v.id != variable.id);
            return Ok(());
        }

        if variable.origin.is_none() {
            return Err(EditError::VariableNotFound {
                name: variable.name.clone(),
            });
        }

        tracing::debug!(name = %variable.name, line = ?variable.line_number(), "staged deletion");
        self.updates.retain(|v| v.id != variable.id);
        upsert(&mut self.deletions, variable.clone());
        Ok(())
    }

    /// Drop every staged operation
    pub fn reset(&mut self) {
        self.additions.clear();
        self.updates.clear();
        self.deletions.clear();
    }

    pub fn additions(&self) -> &[Variable] {
        &self.additions
    }

    pub fn updates(&self) -> &[Variable] {
        &self.updates
    }

    pub fn deletions(&self) -> &[Variable] {
        &self.deletions
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.updates.is_empty() && self.deletions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.additions.len() + self.updates.len() + self.deletions.len()
    }

    /// The variable list as it looks with every staged operation applied:
    /// deletions removed, updates replacing by identity, additions appended.
    pub fn apply_to(&self, loaded: &[Variable]) -> Vec<Variable> {
        let mut visible: Vec<Variable> = loaded
            .iter()
            .filter(|v| !self.deletions.iter().any(|d| d.id == v.id))
            .map(|v| {
                self.updates
                    .iter()
                    .find(|u| u.id == v.id)
                    .cloned()
                    .unwrap_or_else(|| v.clone())
            })
            .collect();
        visible.extend(self.additions.iter().cloned());
        visible
    }
}

fn find_mut(list: &mut [Variable], id: VariableId) -> Option<&mut Variable> {
    list.iter_mut().find(|v| v.id == id)
}

fn upsert(list: &mut Vec<Variable>, variable: Variable) {
    match find_mut(list, variable.id) {
        Some(slot) => *slot = variable,
        None => list.push(variable),
    }
}
