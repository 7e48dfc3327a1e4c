//! Holder for the loaded configuration.
//!
//! The store starts out unset. "Unset" is distinct from an empty or default
//! configuration: readers get `None` until something is installed.

use crate::types::Config;

/// Owns the current configuration, if any.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    config: Option<Config>,
}

impl ConfigStore {
    /// Creates an unset store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current configuration, or clears it when given `None`.
    ///
    /// No validation is performed.
    pub fn set_config(&mut self, config: Option<Config>) {
        self.config = config;
    }

    /// Installs `config` and returns a reference to the installed value.
    pub fn install(&mut self, config: Config) -> &Config {
        self.config.insert(config)
    }

    /// Returns the current configuration, or `None` if never set.
    pub fn get_config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Returns true once a configuration has been installed.
    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    /// Returns the store to its unset state.
    pub fn clear(&mut self) {
        self.config = None;
    }
}
