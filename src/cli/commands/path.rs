//! Path command implementation

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::apply_changes;
use crate::cli::args::PathCommands;
use crate::cli::context::Context;
use crate::path_list::PathListEditor;

/// Execute a path subcommand against the variable `name`
pub fn execute(ctx: &Context, name: &str, command: &PathCommands) -> Result<()> {
    let mut session = ctx.load_session()?;
    let variable = session.find_by_name(name).with_context(|| {
        format!(
            "'{}' is not defined in {}. Use 'envedit set {}=...' first.",
            name,
            ctx.config_file.display(),
            name
        )
    })?;
    let mut editor = PathListEditor::from_variable(&variable);

    match command {
        PathCommands::List => {
            print_segments(name, &editor);
            return Ok(());
        }
        PathCommands::Add { dir, at } => {
            let index = match at {
                Some(position) => to_index(*position)?,
                None => editor.len(),
            };
            editor.insert(index, dir.clone())?;
        }
        PathCommands::Remove { position } => {
            let removed = editor.remove(to_index(*position)?)?;
            println!("Removing {}", removed.path.cyan());
        }
        PathCommands::Move { from, to, count } => {
            let start = to_index(*from)?;
            let end = start
                .checked_add(*count)
                .context("--count is larger than the list")?;
            editor.move_range(start..end, to_index(*to)?)?;
        }
        PathCommands::Dedup => {
            let removed = editor.dedup();
            println!("{} duplicate segment(s) removed", removed);
        }
    }

    print_segments(name, &editor);
    session.stage_update(editor.to_variable(&variable))?;
    apply_changes(ctx, &mut session)?;
    Ok(())
}

fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .context("Positions start at 1")
}

fn print_segments(name: &str, editor: &PathListEditor) {
    println!("{}", name.bold());
    for (index, entry) in editor.entries().iter().enumerate() {
        let marker = if entry.exists {
            " ".normal()
        } else {
            "!".yellow()
        };
        println!("{:>4} {} {}", index + 1, marker, entry.path);
    }
    if !editor.missing().is_empty() {
        println!("{}", "! = directory not found".dimmed());
    }
}
