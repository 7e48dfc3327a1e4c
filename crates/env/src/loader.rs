//! Reading `config.yaml` from disk.
//!
//! Responsibilities:
//! - Read and parse the YAML configuration file into a `Config`.
//! - Reject configurations whose `dotfile_name` cannot name a file.
//!
//! Does NOT handle:
//! - Provisioning a missing config file (see `ensure`).
//! - Installing the result anywhere (see `Env::load_config`).

use std::path::Path;

use crate::error::ConfigFileError;
use crate::fs::FileSystem;
use crate::types::Config;

/// Reads and parses the config file at `path`.
pub fn read_config_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> Result<Config, ConfigFileError> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let config = parse_config(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !config.has_valid_dotfile_name() {
        return Err(ConfigFileError::InvalidDotfileName {
            path: path.to_path_buf(),
            name: config.dotfile_name,
        });
    }

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Parses YAML config content.
///
/// A document that is empty or only comments yields the default config.
pub fn parse_config(content: &str) -> Result<Config, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(Config::default());
    }
    serde_yaml::from_value(value)
}
