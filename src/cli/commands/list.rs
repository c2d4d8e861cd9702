//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::model::Variable;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
pub(crate) fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Execute the list command
pub fn execute(ctx: &Context, system: bool) -> Result<()> {
    let session = ctx.load_session()?;
    let variables = session.variables();
    let shown_path = session
        .config()
        .map(|c| c.display_path())
        .unwrap_or_default();

    println!(
        "{} {} ({})",
        "Variables in".bold(),
        shown_path.cyan(),
        ctx.shell_type.display_name()
    );

    if variables.is_empty() {
        println!("{}", "No variables found.".dimmed());
    } else {
        print_table(&variables);
    }

    if system || ctx.config.ui.show_system {
        println!();
        println!("{}", "Process environment (read-only)".bold());
        print_table(session.system_variables());
    }

    Ok(())
}

pub(crate) fn print_table(variables: &[Variable]) {
    let term_width = get_terminal_width();
    let name_width = variables
        .iter()
        .map(|v| v.name.len())
        .max()
        .unwrap_or(4)
        .clamp(4, 30);
    let line_width = 6;
    let value_width = term_width
        .saturating_sub(name_width + line_width + 2)
        .max(10);

    println!(
        "{:>line_w$} {:<name_w$} {}",
        "LINE".bold().cyan(),
        "NAME".bold().cyan(),
        "VALUE".bold().cyan(),
        line_w = line_width,
        name_w = name_width
    );

    for variable in variables {
        let line = variable
            .line_number()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let name = truncate_value(&variable.name, name_width);
        let name = if variable.is_system() {
            name.white()
        } else {
            name.yellow()
        };
        println!(
            "{:>line_w$} {:<name_w$} {}",
            line.dimmed(),
            name,
            truncate_value(&variable.value, value_width),
            line_w = line_width,
            name_w = name_width
        );
    }
}
