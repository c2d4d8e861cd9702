//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use super::apply_changes;
use crate::cli::args::parse_definition;
use crate::cli::context::Context;
use crate::model::Variable;

/// Stage `NAME=VALUE` and write it
pub fn execute(ctx: &Context, definition: &str) -> Result<()> {
    let (name, value) = parse_definition(definition)?;
    let mut session = ctx.load_session()?;

    let staged = session.stage_add(Variable::new(name, value))?;
    match staged.line_number() {
        Some(line) => println!(
            "Updating {} (line {})",
            staged.name.cyan(),
            line.to_string().dimmed()
        ),
        None => println!("Adding {}", staged.name.cyan()),
    }

    apply_changes(ctx, &mut session)?;
    Ok(())
}
