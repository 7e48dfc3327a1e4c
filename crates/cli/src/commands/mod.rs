//! CLI command implementations.

pub mod config;
pub mod init;
pub mod paths;
pub mod setup;
pub mod uuid;
