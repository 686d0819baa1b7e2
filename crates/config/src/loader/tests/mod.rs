//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test builder configuration and default path substitution.
//! - Test merge order, overwrite policy and expansion against isolated providers.
//! - Test process-environment loading, skip rules and I/O failures.
//! - Test typed accessors over the process environment.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write env file");
    path
}
