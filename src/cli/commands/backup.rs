//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::BackupCommands;
use crate::cli::context::Context;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    match backup_cmd {
        BackupCommands::List { all } => list_backups(ctx, *all),
        BackupCommands::Restore { id } => restore_backup(ctx, id),
    }
}

fn list_backups(ctx: &Context, all: bool) -> Result<()> {
    let store = ctx.backup_store();
    let backups = if all {
        store.list_backups()?
    } else {
        store.list_backups_for(&ctx.config_file)?
    };

    if backups.is_empty() {
        println!("{}", "No backups found.".dimmed());
        return Ok(());
    }

    println!(
        "{} {}",
        "Backups in".bold(),
        store.dir().display().to_string().cyan()
    );
    println!();
    println!(
        "{:<45} {}",
        "ID".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(60).dimmed());

    for backup in &backups {
        println!(
            "{:<45} {}",
            backup.id.white(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &Context, id: &str) -> Result<()> {
    let mut session = ctx.load_session()?;
    let backup = session.backups().get_backup(&ctx.config_file, id)?;

    println!(
        "Restoring backup: {} ({})",
        backup.id.cyan(),
        backup.timestamp.dimmed()
    );

    if ctx.dry_run {
        println!("{}", "Dry run, nothing written.".dimmed());
        return Ok(());
    }

    if !ctx.assume_yes
        && !Confirm::new()
            .with_prompt("This will overwrite your current configuration. Continue?")
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    session.restore(&backup)?;

    ctx.print_success(&format!(
        "Restored backup to {}",
        ctx.config_file.display().to_string().cyan()
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
