//! Reading a single env file.
//!
//! Responsibilities:
//! - Classify one path as loaded, skipped (missing or directory) or failed.
//! - Open, fully read and close the file before returning.
//!
//! Does NOT handle:
//! - Merging entries across files or applying them (see `builder.rs`).
//!
//! Invariants:
//! - Only `NotFound` counts as missing; every other I/O error is a failure.
//! - Directories are skipped without being opened.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::parser::{KeyValue, parse_entries};

/// Why a path contributed nothing to a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing exists at the path.
    Missing,
    /// The path is a directory.
    Directory,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "missing"),
            SkipReason::Directory => write!(f, "directory"),
        }
    }
}

/// Reported status of one path in a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was read; `entries` counts assignment lines, duplicates included.
    Loaded { entries: usize },
    /// The path was skipped.
    Skipped(SkipReason),
}

/// Outcome of reading one path.
#[derive(Debug)]
pub(super) enum FileOutcome {
    Loaded(Vec<KeyValue>),
    Skipped(SkipReason),
    Failed(std::io::Error),
}

pub(super) fn read_env_file(path: &Path) -> FileOutcome {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => return FileOutcome::Skipped(SkipReason::Directory),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return FileOutcome::Skipped(SkipReason::Missing);
        }
        Err(e) => return FileOutcome::Failed(e),
    }

    let file = match File::open(path) {
        Ok(file) => file,
        // Removed between the metadata check and the open.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return FileOutcome::Skipped(SkipReason::Missing);
        }
        Err(e) => return FileOutcome::Failed(e),
    };

    match parse_entries(BufReader::new(file)) {
        Ok(entries) => FileOutcome::Loaded(entries),
        Err(e) => FileOutcome::Failed(e),
    }
}
