//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Resolving the hobo home (see `main()`).

use std::io::Write;

use anyhow::{Context, Result};
use hobo_env::{Env, FileSystem};

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command<F: FileSystem>(
    cli: &Cli,
    env: &mut Env<F>,
    out: &mut dyn Write,
) -> Result<()> {
    match cli.command {
        Commands::Setup => commands::setup::run(env, cli.output, out)?,
        Commands::Config => commands::config::run(env, cli.output, out)?,
        Commands::Uuid => {
            let start = cli
                .start_dir()
                .context("Failed to determine the directory to search from")?;
            commands::uuid::run(env, &start, cli.output, out)?;
        }
        Commands::Init => {
            let dir = cli
                .start_dir()
                .context("Failed to determine the directory to initialize")?;
            commands::init::run(env, &dir, cli.output, out)?;
        }
        Commands::Paths => commands::paths::run(env, cli.output, out)?,
    }
    out.flush()?;
    Ok(())
}
