//! Line-level comparison of current and rendered content

/// One changed line, 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Changed {
        line: usize,
        old: String,
        new: String,
    },
    Added {
        line: usize,
        new: String,
    },
}

/// Compare file text before and after rendering.
///
/// Rendering never removes lines, so comparing by position and reporting the
/// tail as additions covers every change.
pub fn diff(old: &str, new: &str) -> Vec<LineChange> {
    let old_lines = lines(old);
    let new_lines = lines(new);
    let mut changes = Vec::new();

    for (index, new_line) in new_lines.iter().enumerate() {
        match old_lines.get(index) {
            Some(old_line) if old_line == new_line => {}
            Some(old_line) => changes.push(LineChange::Changed {
                line: index + 1,
                old: old_line.to_string(),
                new: new_line.to_string(),
            }),
            None => changes.push(LineChange::Added {
                line: index + 1,
                new: new_line.to_string(),
            }),
        }
    }

    changes
}

fn lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    if text.ends_with('\n') {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes() {
        assert!(diff("export A=1\n", "export A=1\n").is_empty());
    }

    #[test]
    fn test_changed_and_added() {
        let changes = diff(
            "export A=1\nexport B=2\n",
            "# export A=1 # Removed by envedit\nexport B=2\nexport C=3\n",
        );
        assert_eq!(
            changes,
            vec![
                LineChange::Changed {
                    line: 1,
                    old: "export A=1".into(),
                    new: "# export A=1 # Removed by envedit".into(),
                },
                LineChange::Added {
                    line: 3,
                    new: "export C=3".into(),
                },
            ]
        );
    }

    #[test]
    fn test_new_file_is_all_additions() {
        let changes = diff("", "export X=1\n");
        assert_eq!(
            changes,
            vec![LineChange::Added {
                line: 1,
                new: "export X=1".into()
            }]
        );
    }

    #[test]
    fn test_added_to_unterminated_file() {
        let changes = diff("export A=1", "export A=1\nexport B=2\n");
        assert_eq!(
            changes,
            vec![LineChange::Added {
                line: 2,
                new: "export B=2".into()
            }]
        );
    }
}
