//! Paths command: show what hobo ensures and what already exists.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use hobo_env::{Env, FileSystem};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::output::render;

#[derive(Debug, Serialize)]
struct DirStatus {
    path: PathBuf,
    exists: bool,
}

#[derive(Debug, Serialize)]
struct FileStatus {
    path: PathBuf,
    default: PathBuf,
    exists: bool,
}

#[derive(Debug, Serialize)]
struct PathsOutput {
    home: PathBuf,
    config: PathBuf,
    directories: Vec<DirStatus>,
    files: Vec<FileStatus>,
}

pub fn run<F: FileSystem>(env: &Env<F>, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let spec = env.ensure_spec();
    let output = PathsOutput {
        home: env.paths().root.clone(),
        config: env.paths().config_path.clone(),
        directories: spec
            .dirs
            .iter()
            .map(|dir| DirStatus {
                exists: env.is_dir(dir),
                path: dir.clone(),
            })
            .collect(),
        files: spec
            .files
            .iter()
            .map(|entry| FileStatus {
                path: entry.target.clone(),
                default: spec.default_source(entry),
                exists: env.is_file(&entry.target),
            })
            .collect(),
    };
    out.write_all(render(&output, format)?.as_bytes())?;
    Ok(())
}
