//! Shared test utilities for envload integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that runs inside a temp directory.
//! - Write env files for a test.
//!
//! Invariants / Assumptions:
//! - Every command runs with its working directory set to the test's temp dir,
//!   so a stray `.env` in the repository is never picked up.
//! - `RUST_LOG` is cleared so log output does not depend on the host.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `envload` command running in `dir`.
pub fn envload_cmd(dir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envload");
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `dir/name` and return the full path.
#[allow(dead_code)]
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write env file");
    path
}
