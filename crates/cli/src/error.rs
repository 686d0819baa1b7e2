//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//! - Define CLI-level errors (bad `--default` values, commands that fail to start).
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Exit codes of child processes started by `exec` (forwarded unchanged).
//!
//! Invariants:
//! - Exit code 2 is left to clap for usage errors.
//! - Errors NEVER carry values read from env files, only names and paths.

use envload_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for envload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// An env file exists but could not be read.
    ///
    /// Scripts should check file permissions and encoding.
    EnvFileReadFailed = 3,

    /// A variable requested with `--required` is not set.
    MissingVariable = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::EnvFileRead { .. } => ExitCode::EnvFileReadFailed,
            ConfigError::MissingEnvVar(_) => ExitCode::MissingVariable,
            ConfigError::InvalidEnvValue(_) => ExitCode::GeneralError,
        }
    }
}

/// Errors raised by the CLI itself rather than the loader.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid --default for {kind}: {value:?}")]
    InvalidDefault { kind: &'static str, value: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
