//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn the global flags into an `EnvLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read env files.

use clap::{Parser, Subcommand};
use envload_config::{EnvLoader, LoadOptions, constants::DEFAULT_LIST_SEPARATOR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "envload")]
#[command(about = "Load layered .env files and show, query or run commands with the result", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envload show\n  envload -f .env -f .env.local show --format json\n  envload --overwrite exec -- cargo run\n  envload get PORT --kind int --default 8080\n  envload get DATABASE_URL --required\n"
)]
pub struct Cli {
    /// Env file to load; repeat to layer files (later files win). Defaults to .env
    #[arg(short = 'f', long = "file", global = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Replace variables that are already set in the environment
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// Keep ${VAR} references literally instead of expanding them
    #[arg(long, global = true)]
    pub no_expand: bool,

    /// Log loader activity to stderr at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Loader configured from the global flags.
    pub fn loader(&self) -> EnvLoader {
        EnvLoader::new()
            .with_paths(self.files.iter().cloned())
            .with_options(
                LoadOptions::new()
                    .with_overwrite(self.overwrite)
                    .with_expand(!self.no_expand),
            )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged variables from the env files
    Show {
        /// Output format (dotenv, json, shell)
        #[arg(long, default_value = "dotenv")]
        format: String,
    },

    /// Run a command with the loaded environment
    Exec {
        /// Command and arguments to run (put them after `--`)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "CMD")]
        command: Vec<String>,
    },

    /// Read one variable after loading, with type conversion
    Get {
        /// Variable name
        key: String,

        /// Value type (string, int, bool, duration, list)
        #[arg(long, default_value = "string")]
        kind: String,

        /// Value used when the variable is unset, empty or unparsable
        #[arg(long, allow_hyphen_values = true)]
        default: Option<String>,

        /// Item separator for --kind list
        #[arg(long, default_value = DEFAULT_LIST_SEPARATOR)]
        separator: String,

        /// Fail with exit code 4 when the variable is unset
        #[arg(long)]
        required: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_are_kept_in_order() {
        let cli = Cli::try_parse_from(["envload", "-f", "a.env", "--file", "b.env", "show"]).unwrap();
        assert_eq!(cli.files, [PathBuf::from("a.env"), PathBuf::from("b.env")]);
        assert_eq!(
            cli.loader().paths(),
            [PathBuf::from("a.env"), PathBuf::from("b.env")]
        );
    }

    #[test]
    fn test_loader_defaults() {
        let cli = Cli::try_parse_from(["envload", "show"]).unwrap();
        let loader = cli.loader();
        assert_eq!(loader.paths(), [PathBuf::from(".env")]);
        assert!(!loader.options().overwrite);
        assert!(loader.options().expand);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["envload", "show", "--overwrite", "--no-expand"]).unwrap();
        assert!(cli.loader().options().overwrite);
        assert!(!cli.loader().options().expand);
    }

    #[test]
    fn test_exec_keeps_child_flags() {
        let cli = Cli::try_parse_from(["envload", "exec", "--", "ls", "-la", "--color"]).unwrap();
        match cli.command {
            Commands::Exec { command } => assert_eq!(command, ["ls", "-la", "--color"]),
            other => panic!("expected exec, got {other:?}"),
        }
    }

    #[test]
    fn test_exec_requires_a_command() {
        assert!(Cli::try_parse_from(["envload", "exec"]).is_err());
    }

    #[test]
    fn test_get_defaults() {
        let cli = Cli::try_parse_from(["envload", "get", "PORT"]).unwrap();
        match cli.command {
            Commands::Get {
                key,
                kind,
                default,
                separator,
                required,
            } => {
                assert_eq!(key, "PORT");
                assert_eq!(kind, "string");
                assert_eq!(default, None);
                assert_eq!(separator, ",");
                assert!(!required);
            }
            other => panic!("expected get, got {other:?}"),
        }
    }
}
