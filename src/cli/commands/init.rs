//! Init command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::config::save_config;
use crate::model::Config;
use crate::writer::create_if_missing;

/// Create the configuration file with its dialect header, and the default
/// settings file if there is none yet
pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.dry_run {
        println!("{}", "Dry run, nothing written.".dimmed());
        return Ok(());
    }

    if create_if_missing(&ctx.config_file, ctx.shell_type)? {
        ctx.print_success(&format!("Created: {}", ctx.config_file.display()));
    } else {
        println!(
            "{} {}",
            ctx.config_file.display().to_string().cyan(),
            "already exists.".dimmed()
        );
    }

    let settings = Config::config_path();
    if !settings.exists() {
        save_config(&ctx.config)?;
        println!(
            "{} {}",
            "Settings:".dimmed(),
            settings.display().to_string().dimmed()
        );
    }
    Ok(())
}
