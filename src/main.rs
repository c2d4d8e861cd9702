//! envedit - Environment variable editor for shell startup files

use std::env;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use envedit::cli::{commands, Cli, Context};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let ctx = Context::from_cli(&cli)?;
    debug!(
        "Editing {} as {}",
        ctx.config_file.display(),
        ctx.shell_type
    );

    match commands::execute(&ctx, &cli.command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            ctx.print_error(&format!("{:#}", err));
            Ok(ExitCode::FAILURE)
        }
    }
}
