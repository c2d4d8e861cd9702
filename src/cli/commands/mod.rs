//! CLI command implementations

pub mod backup;
pub mod check;
pub mod env;
pub mod init;
pub mod list;
pub mod path;
pub mod set;
pub mod unset;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::Commands;
use crate::cli::context::Context;
use crate::preview::{diff, LineChange};
use crate::session::EditSession;

/// Dispatch a parsed command
pub fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::List { system } => list::execute(ctx, *system),
        Commands::Set { definition } => set::execute(ctx, definition),
        Commands::Unset { name } => unset::execute(ctx, name),
        Commands::Path { name, path_command } => path::execute(ctx, name, path_command),
        Commands::Check => check::execute(ctx),
        Commands::Env => env::execute(ctx),
        Commands::Init => init::execute(ctx),
        Commands::Backup { backup_command } => backup::execute(ctx, backup_command),
    }
}

/// Show the pending changes, confirm, and save.
///
/// Returns `true` if the file was written.
pub fn apply_changes(ctx: &Context, session: &mut EditSession) -> Result<bool> {
    if !session.has_unsaved_changes() {
        println!("{}", "Nothing to change.".dimmed());
        return Ok(false);
    }

    let current = session.current_content()?;
    let rendered = session.preview()?;
    print_diff(ctx, &current, &rendered);

    if ctx.dry_run {
        println!("{}", "Dry run, nothing written.".dimmed());
        return Ok(false);
    }

    if !ctx.assume_yes
        && !Confirm::new()
            .with_prompt("Write these changes?")
            .default(true)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(false);
    }

    if let Some(backup) = session.save()? {
        println!(
            "{} {}",
            "Backup:".dimmed(),
            backup.display().to_string().dimmed()
        );
    }
    ctx.print_success(&format!("Saved {}", ctx.config_file.display()));
    ctx.print_reload_hint();
    Ok(true)
}

fn print_diff(ctx: &Context, current: &str, rendered: &str) {
    println!(
        "{} {}",
        "Changes to".bold(),
        ctx.config_file.display().to_string().cyan()
    );
    for change in diff(current, rendered) {
        match change {
            LineChange::Changed { line, old, new } => {
                println!("{:>5} {} {}", line, "-".red(), old.red());
                println!("{:>5} {} {}", "", "+".green(), new.green());
            }
            LineChange::Added { line, new } => {
                println!("{:>5} {} {}", line, "+".green(), new.green());
            }
        }
    }
    println!();
}
