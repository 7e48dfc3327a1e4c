//! hobo - Command-line front end for the hobo environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the hobo home and hand control to the command handlers.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Provisioning, config loading or marker discovery (see `crates/env`).
//!
//! Invariants:
//! - Logs go to STDERR; STDOUT carries only command output.
//! - `--home` beats `HOBO_HOME`, which beats `~/.hobo`.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use std::path::Path;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use hobo_env::constants::DEFAULTS_DIR_ENV_VAR;
use hobo_env::{Env, HoboPaths, RealFs, env_var_or_none};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> Result<()> {
    let paths = resolve_paths(cli.home.as_deref())?;
    tracing::debug!(home = %paths.root.display(), "Resolved hobo home");
    let mut env = Env::with_paths(RealFs, paths);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(cli, &mut env, &mut out)
}

fn resolve_paths(home: Option<&Path>) -> Result<HoboPaths> {
    match home {
        Some(home) => {
            let mut paths = HoboPaths::new(home);
            if let Some(defaults) = env_var_or_none(DEFAULTS_DIR_ENV_VAR) {
                paths = paths.with_defaults_root(defaults);
            }
            Ok(paths)
        }
        None => Ok(HoboPaths::resolve()?),
    }
}
