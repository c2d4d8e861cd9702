//! Env command implementation

use anyhow::Result;
use colored::Colorize;

use super::list::print_table;
use crate::cli::context::Context;
use crate::parser::list_process_environment;

/// Show the process environment
pub fn execute(_ctx: &Context) -> Result<()> {
    let variables = list_process_environment();
    println!("{}", "Process environment (read-only)".bold());
    print_table(&variables);
    println!();
    println!(
        "{}",
        format!("Total: {} variable(s)", variables.len()).dimmed()
    );
    Ok(())
}
