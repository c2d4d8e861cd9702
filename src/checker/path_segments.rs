//! PATH-like value checker

use std::collections::HashSet;

use super::{CheckIssue, Checker, IssueKind};
use crate::model::Variable;
use crate::path_list::PathListEditor;

/// Reports repeated and missing segments in PATH-like variables.
///
/// Missing directories are advisory only.
pub struct PathSegmentChecker;

impl Checker for PathSegmentChecker {
    fn check(&self, variables: &[Variable]) -> Vec<CheckIssue> {
        let mut issues = Vec::new();

        for variable in variables.iter().filter(|v| v.is_path_like()) {
            let editor = PathListEditor::from_variable(variable);
            let mut seen = HashSet::new();

            for entry in editor.entries() {
                if !seen.insert(entry.path.as_str()) {
                    issues.push(CheckIssue::new(
                        variable,
                        IssueKind::RepeatedSegment(entry.path.clone()),
                    ));
                }
            }

            for index in editor.missing() {
                let path = &editor.entries()[index].path;
                // Unexpanded references are not checked
                if path.contains('$') {
                    continue;
                }
                issues.push(CheckIssue::new(
                    variable,
                    IssueKind::MissingDirectory(path.clone()),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Origin;
    use tempfile::tempdir;

    #[test]
    fn test_repeated_and_missing_segments() {
        let dir = tempdir().unwrap();
        let present = dir.path().to_string_lossy().to_string();
        let value = format!("{0}:/no/such/dir:{0}:$HOME/bin", present);
        let var = Variable::new("PATH", value).with_origin(Origin::new(".zshrc", 3));

        let issues = PathSegmentChecker.check(&[var]);
        assert_eq!(
            issues.iter().map(|i| i.kind.clone()).collect::<Vec<_>>(),
            vec![
                IssueKind::RepeatedSegment(present),
                IssueKind::MissingDirectory("/no/such/dir".into()),
            ]
        );
        assert!(issues.iter().all(|i| i.line == Some(3)));
    }

    #[test]
    fn test_non_path_variables_ignored() {
        let var = Variable::new("EDITOR", "/no/such/editor");
        assert!(PathSegmentChecker.check(&[var]).is_empty());
    }
}
