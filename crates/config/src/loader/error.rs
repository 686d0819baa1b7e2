//! Error types for env file loading and required variables.
//!
//! Responsibilities:
//! - Define error variants for genuine load failures and missing or unreadable
//!   required variables.
//!
//! Does NOT handle:
//! - Missing files, directories or malformed lines: those are not errors.
//! - Typed accessor parse failures: those fall back to the caller's default.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths).
//! - Errors NEVER include raw env file contents to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading env files or reading required variables.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A required variable is set, but its value is not valid UTF-8.
    #[error("Environment variable {0} is set but its value is not valid UTF-8")]
    InvalidEnvValue(String),

    /// An env file exists but could not be opened or read.
    ///
    /// SAFETY: Only the path and the I/O error are reported, never file content.
    #[error("Failed to read env file at {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The I/O error kind behind a read failure, if this is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            ConfigError::EnvFileRead { source, .. } => Some(source.kind()),
            ConfigError::MissingEnvVar(_) | ConfigError::InvalidEnvValue(_) => None,
        }
    }
}
