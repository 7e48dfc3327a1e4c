//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hobo")]
#[command(about = "hobo - bootstrap the hobo environment and identify the current project", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  hobo setup\n  hobo config -o json\n  hobo uuid --dir ~/src/my-app\n  hobo init\n  HOBO_HOME=/tmp/hobo hobo paths\n"
)]
pub struct Cli {
    /// Hobo home directory (default: ~/.hobo)
    #[arg(long, global = true, env = "HOBO_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Directory to start project discovery from (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create missing hobo directories and default files
    Setup,

    /// Print the loaded configuration
    Config,

    /// Print the identifier of the project containing --dir
    Uuid,

    /// Mark --dir as a project by writing a new identifier
    Init,

    /// List the directories and files hobo ensures, and whether they exist
    Paths,
}

/// Output formats for structured command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl Cli {
    /// The directory project discovery starts from.
    pub fn start_dir(&self) -> std::io::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["hobo", "uuid", "--dir", "/work", "-o", "json"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/work")));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Uuid));
    }

    #[test]
    fn test_start_dir_defaults_to_cwd() {
        let cli = Cli::try_parse_from(["hobo", "uuid"]).unwrap();
        assert_eq!(cli.start_dir().unwrap(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["hobo", "config", "-o", "xml"]).is_err());
    }
}
