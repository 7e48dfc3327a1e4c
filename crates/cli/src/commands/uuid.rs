//! Uuid command: print the identifier of the enclosing project.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use hobo_env::{Env, FileSystem};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::ProjectNotFound;
use crate::output::render;

/// A project identifier as printed by `uuid` and `init`.
#[derive(Debug, Serialize)]
pub(crate) struct IdOutput<'a> {
    pub uuid: &'a str,
}

pub fn run<F: FileSystem>(
    env: &mut Env<F>,
    start: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match env.load_from(start)? {
        Some(uuid) => {
            out.write_all(render(&IdOutput { uuid }, format)?.as_bytes())?;
            Ok(())
        }
        None => Err(ProjectNotFound.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};
    use hobo_env::{HoboPaths, RealFs};
    use tempfile::TempDir;

    fn bootstrapped(temp: &TempDir) -> Env {
        let env = Env::with_paths(RealFs, HoboPaths::new(temp.path().join(".hobo")));
        env.bootstrap().unwrap();
        env
    }

    #[test]
    fn test_prints_identifier_from_ancestor() {
        let temp = TempDir::new().unwrap();
        let mut env = bootstrapped(&temp);
        let project = temp.path().join("project");
        let start = project.join("src");
        std::fs::create_dir_all(&start).unwrap();
        std::fs::write(project.join(".hobo"), "foo\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        run(&mut env, &start, OutputFormat::Yaml, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "uuid: foo\n");
    }

    #[test]
    fn test_json_output_format() {
        let temp = TempDir::new().unwrap();
        let mut env = bootstrapped(&temp);
        let project = temp.path().join("project");
        std::fs::create_dir(&project).unwrap();
        std::fs::write(project.join(".hobo"), "foo\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        run(&mut env, &project, OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "uuid": "foo" }));
    }

    #[test]
    fn test_home_directory_is_not_a_marker() {
        let temp = TempDir::new().unwrap();
        let mut env = bootstrapped(&temp);
        let start = temp.path().join("src").join("app");
        std::fs::create_dir_all(&start).unwrap();

        let err = run(&mut env, &start, OutputFormat::Yaml, &mut Vec::<u8>::new()).unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_missing_marker_is_not_found() {
        let temp = TempDir::new().unwrap();
        let mut env = bootstrapped(&temp);
        std::fs::write(
            temp.path().join(".hobo").join("config.yaml"),
            "dotfile_name: unpossiblyunpossiblfilename\n",
        )
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let err = run(&mut env, temp.path(), OutputFormat::Yaml, &mut out).unwrap_err();

        assert_eq!(err.exit_code(), ExitCode::NotFound);
        assert!(out.is_empty());
    }
}
