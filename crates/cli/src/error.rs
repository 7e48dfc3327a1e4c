//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map EnvError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use hobo_env::EnvError;

/// Structured exit codes for hobo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Setup failure - a directory or default file could not be created.
    ///
    /// Scripts should check permissions on the hobo home directory.
    SetupFailed = 2,

    /// Configuration error - config file missing, unreadable or invalid.
    ///
    /// Scripts should run `hobo setup` or fix the config file.
    ConfigError = 3,

    /// Not found - no project marker between the start directory and root.
    NotFound = 4,

    /// Marker error - the project marker is unreadable, empty or already present.
    MarkerError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        if err.is_provisioning() {
            ExitCode::SetupFailed
        } else if err.is_config() {
            ExitCode::ConfigError
        } else if err.is_marker() {
            ExitCode::MarkerError
        } else {
            ExitCode::GeneralError
        }
    }
}

/// Raised by commands that require a project when none is found.
#[derive(Debug)]
pub struct ProjectNotFound;

impl std::fmt::Display for ProjectNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("No project marker found; run `hobo init` in the project root")
    }
}

impl std::error::Error for ProjectNotFound {}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(env_err) = cause.downcast_ref::<EnvError>() {
                return ExitCode::from(env_err);
            }
            if cause.is::<ProjectNotFound>() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
