//! Init command: mark a directory as a project root.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use hobo_env::{Env, FileSystem};

use crate::args::OutputFormat;
use crate::commands::uuid::IdOutput;
use crate::output::render;

pub fn run<F: FileSystem>(
    env: &mut Env<F>,
    dir: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    env.load_config()?;
    let uuid = env.persist_uuid(dir)?;
    out.write_all(render(&IdOutput { uuid }, format)?.as_bytes())?;
    Ok(())
}
