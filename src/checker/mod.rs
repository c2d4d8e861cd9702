//! Advisory consistency checks over a variable list
//!
//! Nothing reported here blocks a save. Checks run on the working list, so
//! staged edits are taken into account.

mod duplicate;
mod path_segments;

use std::fmt;

pub use duplicate::DuplicateChecker;
pub use path_segments::PathSegmentChecker;

use crate::model::Variable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Same name assigned on several lines
    DuplicateDefinition { lines: Vec<usize> },
    /// Segment listed more than once in a PATH-like value
    RepeatedSegment(String),
    /// Segment naming a directory that is not there
    MissingDirectory(String),
}

/// One finding, tied to the variable it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIssue {
    pub name: String,
    pub line: Option<usize>,
    pub kind: IssueKind,
}

impl CheckIssue {
    pub fn new(variable: &Variable, kind: IssueKind) -> Self {
        Self {
            name: variable.name.clone(),
            line: variable.line_number(),
            kind,
        }
    }
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::DuplicateDefinition { lines } => {
                let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "Duplicate variable '{}' defined on lines: {}",
                    self.name,
                    lines.join(", ")
                )
            }
            IssueKind::RepeatedSegment(path) => {
                write!(f, "Segment '{}' appears more than once", path)
            }
            IssueKind::MissingDirectory(path) => {
                write!(f, "Directory '{}' does not exist", path)
            }
        }
    }
}

pub trait Checker {
    fn check(&self, variables: &[Variable]) -> Vec<CheckIssue>;
}

/// Run every check, issues ordered by line
pub fn check_all(variables: &[Variable]) -> Vec<CheckIssue> {
    let checkers: [&dyn Checker; 2] = [&DuplicateChecker, &PathSegmentChecker];
    let mut issues: Vec<CheckIssue> = checkers
        .iter()
        .flat_map(|c| c.check(variables))
        .collect();
    // Stable sort keeps checker order within a line; unwritten additions last
    issues.sort_by_key(|i| i.line.unwrap_or(usize::MAX));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Origin;

    #[test]
    fn test_check_all_orders_by_line() {
        let vars = vec![
            Variable::new("PATH", "/nope/a:/nope/a").with_origin(Origin::new(".zshrc", 2)),
            Variable::new("EDITOR", "vi").with_origin(Origin::new(".zshrc", 5)),
            Variable::new("EDITOR", "nvim"),
        ];
        let issues = check_all(&vars);

        let lines: Vec<Option<usize>> = issues.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![Some(2), Some(2), Some(2), Some(5)]);
        assert_eq!(
            issues[0].kind,
            IssueKind::RepeatedSegment("/nope/a".into())
        );
        assert_eq!(
            issues[3].to_string(),
            "Duplicate variable 'EDITOR' defined on lines: 5"
        );
    }

    #[test]
    fn test_clean_list_has_no_issues() {
        let vars = vec![Variable::new("LANG", "C").with_origin(Origin::new(".zshrc", 1))];
        assert!(check_all(&vars).is_empty());
    }
}
