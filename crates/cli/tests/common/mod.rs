//! Shared test utilities for hobo integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a scratch home.
//!
//! Invariants / Assumptions:
//! - `HOBO_HOME` always points into a temporary directory.
//! - `HOBO_DEFAULTS_DIR` is cleared so the bundled defaults are used.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `hobo` command whose home is `home`.
pub fn hobo_cmd(home: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hobo");
    cmd.env("HOBO_HOME", home);
    cmd.env_remove("HOBO_DEFAULTS_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}
