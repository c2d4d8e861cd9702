//! Duplicate definition checker

use super::{CheckIssue, Checker, IssueKind};
use crate::model::Variable;

/// Reports names defined more than once in the same file
pub struct DuplicateChecker;

impl Checker for DuplicateChecker {
    fn check(&self, variables: &[Variable]) -> Vec<CheckIssue> {
        // Group by name, keeping first-seen order for stable output
        let mut seen: Vec<(&Variable, Vec<usize>, usize)> = Vec::new();
        for variable in variables {
            match seen.iter_mut().find(|(first, _, _)| first.name == variable.name) {
                Some((_, lines, count)) => {
                    lines.extend(variable.line_number());
                    *count += 1;
                }
                None => seen.push((variable, variable.line_number().into_iter().collect(), 1)),
            }
        }

        seen.into_iter()
            .filter(|(_, _, count)| *count > 1)
            .map(|(first, lines, _)| {
                CheckIssue::new(first, IssueKind::DuplicateDefinition { lines })
            })
            .collect()
    }
}
