//! Error types for environment bootstrap.
//!
//! Responsibilities:
//! - Define error variants for directory/file provisioning, configuration
//!   loading and marker discovery.
//! - Provide conversion from lower-level errors (e.g., `ConfigFileError`).
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the `hobo` binary).
//!
//! Invariants:
//! - Every variant that touches the filesystem carries the offending path(s).
//! - "No marker found" is never an error; it is `Ok(None)` from discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the configuration file.
///
/// Together these make up the "config load" failure class: the file is
/// missing or unreadable, or its content is not a valid configuration.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid dotfile_name {name:?} in config file at {path}: must be a plain file name")]
    InvalidDotfileName { path: PathBuf, name: String },
}

impl ConfigFileError {
    /// Path of the configuration file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigFileError::Read { path, .. }
            | ConfigFileError::Parse { path, .. }
            | ConfigFileError::InvalidDotfileName { path, .. } => path,
        }
    }
}

/// Errors that can occur during environment bootstrap.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Unable to determine home directory; set HOBO_HOME to choose one")]
    HomeDirUnavailable,

    #[error("Unable to determine the current working directory: {0}")]
    WorkingDirUnavailable(#[source] std::io::Error),

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to provision {target} from {source_path}: {source}")]
    FileProvision {
        source_path: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    ConfigLoad(#[from] ConfigFileError),

    #[error("No configuration loaded; load the config file before discovering the project marker")]
    ConfigNotLoaded,

    #[error("Failed to read project marker at {path}: {source}")]
    MarkerRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project marker at {path} is empty")]
    EmptyMarker { path: PathBuf },

    #[error("Project marker already exists at {path}")]
    MarkerExists { path: PathBuf },

    #[error("Failed to write project marker at {path}: {source}")]
    MarkerWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EnvError {
    /// Returns true for failures while creating directories or default files.
    pub fn is_provisioning(&self) -> bool {
        matches!(
            self,
            EnvError::DirectoryCreation { .. } | EnvError::FileProvision { .. }
        )
    }

    /// Returns true for failures reading, writing or validating a project marker.
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            EnvError::MarkerRead { .. }
                | EnvError::EmptyMarker { .. }
                | EnvError::MarkerExists { .. }
                | EnvError::MarkerWrite { .. }
        )
    }

    /// Returns true for configuration failures.
    pub fn is_config(&self) -> bool {
        matches!(self, EnvError::ConfigLoad(_) | EnvError::ConfigNotLoaded)
    }
}
