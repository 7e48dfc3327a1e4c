//! Project marker discovery.
//!
//! Responsibilities:
//! - Walk from a starting directory up to the filesystem root looking for the
//!   marker file, and read the identifier from the nearest one.
//! - Write a fresh marker into a directory.
//!
//! Does NOT handle:
//! - Choosing the marker file name (comes from `Config::dotfile_name`).
//! - Caching the identifier (see `Env`).
//!
//! Invariants:
//! - The nearest marker wins; ancestors above it are never consulted.
//! - Only regular files are markers; a directory with the marker name (such as
//!   the hobo home itself) is skipped and the walk continues upward.
//! - A marker file that cannot be read stops the walk with an error.
//! - Reaching the root without a marker is `Ok(None)`, not an error.

use std::path::{Component, Path, PathBuf};

use crate::error::EnvError;
use crate::fs::FileSystem;

/// Searches `start` and each of its ancestors for `dotfile_name`.
///
/// `start` must be absolute; see [`absolute_start`].
pub fn find_marker<F: FileSystem + ?Sized>(
    fs: &F,
    start: &Path,
    dotfile_name: &str,
) -> Result<Option<String>, EnvError> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(dotfile_name);
        tracing::trace!(path = %candidate.display(), "Checking for project marker");
        if fs.is_file(&candidate) {
            let id = read_marker(fs, &candidate)?;
            tracing::debug!(path = %candidate.display(), "Found project marker");
            return Ok(Some(id));
        }
        dir = current.parent();
    }
    tracing::debug!(
        start = %start.display(),
        dotfile_name,
        "No project marker found up to filesystem root"
    );
    Ok(None)
}

/// Reads the identifier from a marker file: its first line, trimmed.
pub fn read_marker<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<String, EnvError> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| EnvError::MarkerRead {
            path: path.to_path_buf(),
            source,
        })?;

    let id = content.lines().next().unwrap_or_default().trim();
    if id.is_empty() {
        return Err(EnvError::EmptyMarker {
            path: path.to_path_buf(),
        });
    }
    Ok(id.to_string())
}

/// Writes `id` into `dir/dotfile_name`. An existing marker is never replaced.
pub fn write_marker<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    dotfile_name: &str,
    id: &str,
) -> Result<PathBuf, EnvError> {
    let path = dir.join(dotfile_name);
    if fs.exists(&path) {
        return Err(EnvError::MarkerExists { path });
    }
    fs.write_new(&path, &format!("{id}\n"))
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => EnvError::MarkerExists { path: path.clone() },
            _ => EnvError::MarkerWrite {
                path: path.clone(),
                source,
            },
        })?;
    tracing::info!(path = %path.display(), "Wrote project marker");
    Ok(path)
}

/// Makes `start` absolute against the current working directory and folds
/// away `.` and `..` components.
///
/// The walk relies on `Path::parent`, which stops early on relative paths and
/// treats `a/b/..` as a child of `a/b`. Folding is lexical, so `..` after a
/// symlinked directory steps back to the link's parent.
pub fn absolute_start(start: &Path) -> Result<PathBuf, EnvError> {
    let absolute = std::path::absolute(start).map_err(EnvError::WorkingDirUnavailable)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
