//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::checker::check_all;
use crate::cli::context::Context;

/// Report advisory issues in the working variable list
pub fn execute(ctx: &Context) -> Result<()> {
    let session = ctx.load_session()?;
    let variables = session.variables();
    let issues = check_all(&variables);

    if issues.is_empty() {
        ctx.print_success("No issues found");
        println!(
            "{}",
            format!("Checked {} variable(s)", variables.len()).dimmed()
        );
        return Ok(());
    }

    println!("{}", "Issues found:".yellow().bold());
    for issue in &issues {
        let line = issue
            .line
            .map(|l| format!("Line {}", l))
            .unwrap_or_else(|| "Unsaved".to_string());
        println!(
            "  {} {} ({}): {}",
            "⚠".yellow(),
            line,
            issue.name.cyan(),
            issue
        );
    }

    println!();
    println!(
        "{}",
        format!("Found {} warning(s)", issues.len()).dimmed()
    );
    Ok(())
}
