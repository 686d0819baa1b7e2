//! CLI command implementations.
//!
//! Every command loads the env files into a snapshot of the process
//! environment; the CLI itself never mutates its own environment.

pub mod exec;
pub mod get;
pub mod show;

use anyhow::{Context, Result};
use envload_config::{EnvLoader, LoadReport, MemoryEnv};

/// Load the configured files into a copy of the current process environment.
pub fn load_snapshot(loader: &EnvLoader) -> Result<(MemoryEnv, LoadReport)> {
    let mut env = MemoryEnv::from_process();
    let report = loader
        .load_with_report(&mut env)
        .context("Failed to load env files")?;

    tracing::debug!(
        files_read = report.files_read(),
        keys = report.values.len(),
        "Loaded environment snapshot"
    );

    Ok((env, report))
}
