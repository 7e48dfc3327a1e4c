//! Path helpers and the built-in ensure declaration.
//!
//! Responsibilities:
//! - Determine the hobo home directory (`HOBO_HOME` or `~/.hobo`).
//! - Determine the project root that default files are copied from.
//! - Declare which directories and files must exist (`EnsureSpec`).
//!
//! Does NOT handle:
//! - File I/O operations (see `ensure`).
//! - Configuration parsing (see `loader`).
//!
//! Invariants:
//! - Declaration order is stable: `root` before anything inside it.
//! - The config file is always the first file entry.

use std::path::{Path, PathBuf};

use crate::constants::{
    CACHE_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_SOURCE, DEFAULT_SSH_CONFIG_SOURCE,
    DEFAULTS_DIR_ENV_VAR, HOME_DIR_NAME, HOME_ENV_VAR, KEYS_DIR_NAME, PROJECT_ROOT,
    SSH_CONFIG_FILE_NAME,
};
use crate::error::EnvError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// A file that must exist, and the default it is copied from when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Where the file must exist.
    pub target: PathBuf,
    /// Default-content source, relative to the project root.
    pub default: PathBuf,
}

/// The fixed set of directories and files that must exist before normal
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureSpec {
    /// Root that `FileEntry::default` paths are relative to.
    pub project_root: PathBuf,
    /// Directories, in creation order.
    pub dirs: Vec<PathBuf>,
    /// Files, in provisioning order.
    pub files: Vec<FileEntry>,
}

impl EnsureSpec {
    /// Absolute path of the default-content source for `entry`.
    pub fn default_source(&self, entry: &FileEntry) -> PathBuf {
        self.project_root.join(&entry.default)
    }
}

/// All canonical paths below a hobo home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoboPaths {
    pub root: PathBuf,
    pub keys_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub config_path: PathBuf,
    pub ssh_config_path: PathBuf,
    pub defaults_root: PathBuf,
}

impl HoboPaths {
    /// Lays out the hobo paths below `root`, copying defaults from the
    /// compiled-in project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            keys_dir: root.join(KEYS_DIR_NAME),
            cache_dir: root.join(CACHE_DIR_NAME),
            config_path: root.join(CONFIG_FILE_NAME),
            ssh_config_path: root.join(SSH_CONFIG_FILE_NAME),
            defaults_root: PathBuf::from(PROJECT_ROOT),
            root,
        }
    }

    /// Replaces the project root that defaults are copied from.
    pub fn with_defaults_root(mut self, defaults_root: impl Into<PathBuf>) -> Self {
        self.defaults_root = defaults_root.into();
        self
    }

    /// Resolves the paths from the environment.
    ///
    /// - Home: `HOBO_HOME`, else `<user home>/.hobo`.
    /// - Defaults: `HOBO_DEFAULTS_DIR`, else the compiled-in project root.
    pub fn resolve() -> Result<Self, EnvError> {
        let root = match env_var_or_none(HOME_ENV_VAR) {
            Some(home) => PathBuf::from(home),
            None => default_home_dir()?,
        };
        let mut paths = Self::new(root);
        if let Some(defaults) = env_var_or_none(DEFAULTS_DIR_ENV_VAR) {
            paths.defaults_root = PathBuf::from(defaults);
        }
        Ok(paths)
    }

    /// The config file path and the default it is provisioned from.
    pub fn config_entry(&self) -> (&Path, &Path) {
        (&self.config_path, Path::new(DEFAULT_CONFIG_SOURCE))
    }

    /// The directories and files that must exist.
    pub fn ensure_spec(&self) -> EnsureSpec {
        let (config_path, config_default) = self.config_entry();
        EnsureSpec {
            project_root: self.defaults_root.clone(),
            dirs: vec![
                self.root.clone(),
                self.keys_dir.clone(),
                self.cache_dir.clone(),
            ],
            files: vec![
                FileEntry {
                    target: config_path.to_path_buf(),
                    default: config_default.to_path_buf(),
                },
                FileEntry {
                    target: self.ssh_config_path.clone(),
                    default: PathBuf::from(DEFAULT_SSH_CONFIG_SOURCE),
                },
            ],
        }
    }
}

/// Returns the default hobo home directory.
///
/// - Linux/macOS: `~/.hobo`
/// - Windows: `%USERPROFILE%\.hobo`
fn default_home_dir() -> Result<PathBuf, EnvError> {
    let base = directories::BaseDirs::new().ok_or(EnvError::HomeDirUnavailable)?;
    Ok(base.home_dir().join(HOME_DIR_NAME))
}
