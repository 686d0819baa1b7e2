//! Env file loader for process configuration.
//!
//! Responsibilities:
//! - Read an ordered list of `.env` files and merge them (later files win).
//! - Optionally expand `${VAR}` references and apply the result to an environment.
//! - Provide typed accessors over the environment afterwards.
//!
//! Does NOT handle:
//! - Line-level syntax (see `parser`).
//! - Writing env files back to disk.
//!
//! Invariants / Assumptions:
//! - Missing files and directories are skipped; any other I/O error aborts the load.
//! - No variable is written before every file has been read successfully.
//! - Without `overwrite`, variables already in the environment are left untouched.

mod builder;
mod env;
mod error;
mod file;
mod options;

#[cfg(test)]
mod tests;

pub use builder::{EnvLoader, FileReport, LoadReport, load, load_default};
pub use env::{
    EnvReader, env_bool, env_duration, env_int, env_string, env_strings, must_env_string,
};
pub use error::ConfigError;
pub use file::{FileStatus, SkipReason};
pub use options::LoadOptions;
