//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the loader from the global flags once per invocation.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Mapping errors to exit codes (see `error` module).
//!
//! Invariants:
//! - `show` and `get` succeed with exit code 0; `exec` returns the child's code.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::get::GetRequest;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the process exit code on success.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let loader = cli.loader();

    match cli.command {
        Commands::Show { format } => {
            commands::show::run(&loader, &format)?;
        }
        Commands::Exec { command } => {
            return commands::exec::run(&loader, &command);
        }
        Commands::Get {
            key,
            kind,
            default,
            separator,
            required,
        } => {
            let request = GetRequest {
                key: &key,
                kind: &kind,
                default: default.as_deref(),
                separator: &separator,
                required,
            };
            commands::get::run(&loader, &request)?;
        }
    }

    Ok(ExitCode::Success.as_i32())
}
