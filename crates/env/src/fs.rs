//! Filesystem seam used by the environment handler.
//!
//! Every operation that touches disk goes through [`FileSystem`], so the
//! ensure and discovery logic can be exercised with call expectations in
//! tests instead of a scratch directory.

use std::io::{self, Write};
use std::path::Path;

/// The filesystem primitives the environment handler needs.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Returns true if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns true if `path` is a regular file, following symlinks.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns true if `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a single directory. Missing parents are an error.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Copies `from` to `to`, byte for byte. Returns the number of bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Reads a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `contents` to a file that must not exist yet.
    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        std::fs::copy(from, to)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }
}
