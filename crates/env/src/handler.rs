//! The environment handler.
//!
//! Responsibilities:
//! - Own the loaded configuration and the cached project identifier.
//! - Drive provisioning, config loading and marker discovery against a
//!   `FileSystem`.
//!
//! Does NOT handle:
//! - Path layout (see `paths`).
//! - Process exit codes or user-facing output (see the `hobo` binary).
//!
//! Invariants:
//! - Nothing is process-global: each `Env` owns its own state.
//! - A failed `load_config` leaves the previous configuration in place.
//! - `persisted_uuid` only reads the cache; it never walks the filesystem.

use std::path::{Path, PathBuf};

use crate::ensure;
use crate::error::EnvError;
use crate::fs::{FileSystem, RealFs};
use crate::loader::read_config_file;
use crate::marker::{absolute_start, find_marker, write_marker};
use crate::paths::{EnsureSpec, HoboPaths};
use crate::store::ConfigStore;
use crate::types::Config;

/// Paths created by [`Env::bootstrap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl BootstrapReport {
    /// Returns true if nothing had to be created.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

/// Environment handler: ensures the hobo home exists, loads its config and
/// discovers the current project.
#[derive(Debug)]
pub struct Env<F: FileSystem = RealFs> {
    fs: F,
    paths: HoboPaths,
    store: ConfigStore,
    persisted_uuid: Option<String>,
}

impl Env<RealFs> {
    /// Creates a handler on the real filesystem with paths resolved from the
    /// environment (`HOBO_HOME`, `HOBO_DEFAULTS_DIR`).
    pub fn new() -> Result<Self, EnvError> {
        Ok(Self::with_paths(RealFs, HoboPaths::resolve()?))
    }
}

impl<F: FileSystem> Env<F> {
    /// Creates a handler with explicit filesystem and paths.
    pub fn with_paths(fs: F, paths: HoboPaths) -> Self {
        Self {
            fs,
            paths,
            store: ConfigStore::new(),
            persisted_uuid: None,
        }
    }

    pub fn paths(&self) -> &HoboPaths {
        &self.paths
    }

    /// Returns true if `path` is a directory on this handler's filesystem.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.fs.is_dir(path)
    }

    /// Returns true if `path` is a regular file on this handler's filesystem.
    pub fn is_file(&self, path: &Path) -> bool {
        self.fs.is_file(path)
    }

    /// The built-in directories and files this handler ensures.
    pub fn ensure_spec(&self) -> EnsureSpec {
        self.paths.ensure_spec()
    }

    /// Creates every missing directory of the ensure spec.
    pub fn ensure_directories(&self) -> Result<Vec<PathBuf>, EnvError> {
        ensure::ensure_directories(&self.fs, &self.ensure_spec())
    }

    /// Copies the default for every missing file of the ensure spec.
    pub fn ensure_files(&self) -> Result<Vec<PathBuf>, EnvError> {
        ensure::ensure_files(&self.fs, &self.ensure_spec())
    }

    /// Runs [`Self::ensure_directories`] then [`Self::ensure_files`].
    pub fn bootstrap(&self) -> Result<BootstrapReport, EnvError> {
        let directories = self.ensure_directories()?;
        let files = self.ensure_files()?;
        Ok(BootstrapReport { directories, files })
    }

    /// Replaces the configuration, or clears it when given `None`.
    pub fn set_config(&mut self, config: Option<Config>) {
        self.store.set_config(config);
    }

    /// The current configuration, or `None` if nothing was loaded.
    pub fn config(&self) -> Option<&Config> {
        self.store.get_config()
    }

    /// Loads the config file and installs it.
    ///
    /// On failure the previously installed configuration is kept.
    pub fn load_config(&mut self) -> Result<&Config, EnvError> {
        let (path, _) = self.paths.config_entry();
        let config = read_config_file(&self.fs, path)?;
        Ok(self.store.install(config))
    }

    /// Discovers the project identifier starting from the working directory.
    pub fn load_uuid(&mut self) -> Result<Option<&str>, EnvError> {
        let cwd = std::env::current_dir().map_err(EnvError::WorkingDirUnavailable)?;
        self.load_uuid_from(&cwd)
    }

    /// Discovers the project identifier starting from `start`.
    ///
    /// The cache is replaced with the result, so it is `None` when no marker
    /// exists between `start` and the filesystem root.
    pub fn load_uuid_from(&mut self, start: &Path) -> Result<Option<&str>, EnvError> {
        let dotfile_name = self.dotfile_name()?.to_string();
        let start = absolute_start(start)?;
        self.persisted_uuid = find_marker(&self.fs, &start, &dotfile_name)?;
        Ok(self.persisted_uuid())
    }

    /// The cached project identifier from the last discovery.
    pub fn persisted_uuid(&self) -> Option<&str> {
        self.persisted_uuid.as_deref()
    }

    /// Loads the config, then discovers the identifier from the working
    /// directory. Stops at the first failure.
    pub fn load(&mut self) -> Result<Option<&str>, EnvError> {
        self.load_config()?;
        self.load_uuid()
    }

    /// Like [`Self::load`], discovering from `start`.
    pub fn load_from(&mut self, start: &Path) -> Result<Option<&str>, EnvError> {
        self.load_config()?;
        self.load_uuid_from(start)
    }

    /// Generates a new identifier, writes it as the marker in `dir` and
    /// caches it.
    pub fn persist_uuid(&mut self, dir: &Path) -> Result<&str, EnvError> {
        let dotfile_name = self.dotfile_name()?.to_string();
        let id = uuid::Uuid::new_v4().to_string();
        write_marker(&self.fs, dir, &dotfile_name, &id)?;
        Ok(self.persisted_uuid.insert(id).as_str())
    }

    /// Clears the configuration and the cached identifier.
    pub fn reset(&mut self) {
        self.store.clear();
        self.persisted_uuid = None;
    }

    fn dotfile_name(&self) -> Result<&str, EnvError> {
        self.store
            .get_config()
            .map(|config| config.dotfile_name.as_str())
            .ok_or(EnvError::ConfigNotLoaded)
    }
}
