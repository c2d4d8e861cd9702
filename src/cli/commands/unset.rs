//! Unset command implementation

use anyhow::Result;

use super::apply_changes;
use crate::cli::context::Context;

/// Comment out every definition of a variable
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let mut session = ctx.load_session()?;

    let matches = session.find_all_by_name(name);
    if matches.is_empty() {
        ctx.print_warning(&format!(
            "'{}' is not defined in {}",
            name,
            ctx.config_file.display()
        ));
        return Ok(());
    }

    for variable in &matches {
        session.stage_delete(variable)?;
    }

    apply_changes(ctx, &mut session)?;
    Ok(())
}
