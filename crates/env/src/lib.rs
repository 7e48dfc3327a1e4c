//! Environment bootstrap for hobo.
//!
//! This crate makes sure the hobo home directory and its default files exist,
//! loads `config.yaml`, and finds the current project's identifier by walking
//! up from a directory until it meets the project marker file.

pub mod constants;
mod ensure;
mod error;
pub mod fs;
mod handler;
mod loader;
mod marker;
pub mod paths;
mod store;
mod types;

pub use ensure::{ensure_directories, ensure_files};
pub use error::{ConfigFileError, EnvError};
pub use fs::{FileSystem, RealFs};
pub use handler::{BootstrapReport, Env};
pub use loader::{parse_config, read_config_file};
pub use marker::{find_marker, read_marker, write_marker};
pub use paths::{EnsureSpec, FileEntry, HoboPaths, env_var_or_none};
pub use store::ConfigStore;
pub use types::Config;
