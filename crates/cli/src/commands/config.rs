//! Config command: load and print `config.yaml`.

use std::io::Write;

use anyhow::Result;
use hobo_env::{Env, FileSystem};

use crate::args::OutputFormat;
use crate::output::render;

pub fn run<F: FileSystem>(
    env: &mut Env<F>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let config = env.load_config()?;
    out.write_all(render(config, format)?.as_bytes())?;
    Ok(())
}
