//! Exec command implementation.
//!
//! Responsibilities:
//! - Start a child process with the loaded variables applied on top of the
//!   inherited environment.
//! - Report the child's exit status as this process's exit code.
//!
//! Invariants:
//! - Only keys the load applied are set on the child; every other inherited
//!   variable reaches it unchanged, including values that are not valid UTF-8.
//! - The child inherits stdin, stdout and stderr.
//! - A child killed by a signal maps to `128 + signal` on Unix.

use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use envload_config::EnvLoader;
use tracing::debug;

use crate::commands::load_snapshot;
use crate::error::{CliError, ExitCode};

/// Run `command` and return the exit code to forward.
pub fn run(loader: &EnvLoader, command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().context("No command given")?;

    let (_, report) = load_snapshot(loader)?;
    let applied: Vec<(&String, &String)> = report
        .applied
        .iter()
        .filter_map(|key| report.values.get_key_value(key))
        .collect();

    debug!(program = %program, applied = applied.len(), "Starting command");

    let status = Command::new(program)
        .args(args)
        .envs(applied)
        .status()
        .map_err(|source| CliError::Spawn {
            program: program.clone(),
            source,
        })?;

    debug!(status = %status, "Command finished");

    Ok(forwarded_code(status))
}

fn forwarded_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    ExitCode::GeneralError.as_i32()
}
