//! Setup command: create the hobo home and its default files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use hobo_env::{Env, FileSystem};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::render;

#[derive(Debug, Serialize)]
struct SetupOutput {
    home: PathBuf,
    created_directories: Vec<PathBuf>,
    created_files: Vec<PathBuf>,
}

pub fn run<F: FileSystem>(env: &Env<F>, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let report = env.bootstrap()?;
    if report.is_empty() {
        tracing::debug!("Hobo home already set up");
    }
    let output = SetupOutput {
        home: env.paths().root.clone(),
        created_directories: report.directories,
        created_files: report.files,
    };
    out.write_all(render(&output, format)?.as_bytes())?;
    Ok(())
}
