//! Configuration document types.
//!
//! Responsibilities:
//! - Define the typed view of `config.yaml` (`Config`).
//! - Preserve unknown top-level keys so a loaded config round-trips.
//!
//! Does NOT handle:
//! - Reading the file from disk (see `loader`).
//! - Holding the loaded value (see `store`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DOTFILE_NAME;

/// The parsed content of the hobo configuration file.
///
/// `ssh` is handed through untouched to whatever drives ssh; hobo itself only
/// interprets `dotfile_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File name of the project marker looked up during discovery.
    #[serde(default = "default_dotfile_name")]
    pub dotfile_name: String,

    /// Opaque ssh settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<serde_yaml::Mapping>,

    /// Named source paths.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, PathBuf>,

    /// Every other top-level key, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn default_dotfile_name() -> String {
    DEFAULT_DOTFILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dotfile_name: default_dotfile_name(),
            ssh: None,
            sources: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Returns a copy of this config with a different marker file name.
    pub fn with_dotfile_name(mut self, name: impl Into<String>) -> Self {
        self.dotfile_name = name.into();
        self
    }

    /// Looks up a single ssh option by key.
    pub fn ssh_option(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.ssh.as_ref()?.get(key)
    }

    /// Returns true if `dotfile_name` is a plain file name.
    ///
    /// Empty names, `.`/`..`, and anything containing a path separator are
    /// rejected since the walk joins the name onto every ancestor.
    pub fn has_valid_dotfile_name(&self) -> bool {
        let name = self.dotfile_name.as_str();
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\\')
    }
}
