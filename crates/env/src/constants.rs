//! Centralized constants for the hobo environment.
//!
//! This module contains the fixed names and relative paths that make up the
//! built-in environment layout, so they are not duplicated across modules.

// =============================================================================
// Naming
// =============================================================================

/// Application name, used for log targets and user-facing messages.
pub const APP_NAME: &str = "hobo";

/// Name of the per-user hobo directory created below the home directory.
pub const HOME_DIR_NAME: &str = ".hobo";

/// Marker file name used when the configuration does not name one.
pub const DEFAULT_DOTFILE_NAME: &str = ".hobo";

// =============================================================================
// Layout below the hobo home directory
// =============================================================================

/// Directory holding ssh keys managed by hobo.
pub const KEYS_DIR_NAME: &str = "keys";

/// Directory holding cached artifacts.
pub const CACHE_DIR_NAME: &str = "cache";

/// The configuration file loaded by `Env::load_config`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// The ssh client configuration handed to `ssh -F`.
pub const SSH_CONFIG_FILE_NAME: &str = "ssh_config";

// =============================================================================
// Default-content sources (relative to the project root)
// =============================================================================

/// Default content for `config.yaml`.
pub const DEFAULT_CONFIG_SOURCE: &str = "defaults/config.yaml";

/// Default content for `ssh_config`.
pub const DEFAULT_SSH_CONFIG_SOURCE: &str = "defaults/ssh_config";

/// Root that the default-content sources are relative to.
pub const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the hobo home directory (default: `~/.hobo`).
pub const HOME_ENV_VAR: &str = "HOBO_HOME";

/// Overrides the project root that default-content sources are copied from.
pub const DEFAULTS_DIR_ENV_VAR: &str = "HOBO_DEFAULTS_DIR";
