//! Env loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` over an ordered list of env files.
//! - Merge every file into one `EnvMap` (later files win), expand `${VAR}` when asked,
//!   then apply the result to an `EnvProvider` under the overwrite policy.
//! - Expose the `load` / `load_default` shortcuts bound to the process environment.
//!
//! Does NOT handle:
//! - Line parsing (see `parser`).
//! - Typed reads of variables (see `env.rs`).
//!
//! Invariants / Assumptions:
//! - An empty path list means the single default file `.env`.
//! - Files are read strictly in order, one at a time; a failed read aborts the load
//!   before anything is written to the provider.
//! - Expansion runs once, after all files are merged, against the merged values
//!   with the provider as fallback.
//! - Without `overwrite`, a key already present in the provider is never modified.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::file::{FileOutcome, FileStatus, read_env_file};
use super::options::LoadOptions;
use crate::constants::DEFAULT_ENV_FILE;
use crate::expand::expand;
use crate::parser::{EnvMap, KeyValue};
use crate::provider::{EnvProvider, ProcessEnv};

/// Status of one path after a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Everything a load did, for callers that need more than the final values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Final merged (and possibly expanded) values.
    pub values: EnvMap,
    /// One entry per path, in load order.
    pub files: Vec<FileReport>,
    /// Keys written to the provider.
    pub applied: Vec<String>,
    /// Keys left alone because the provider already had them.
    pub preserved: Vec<String>,
}

impl LoadReport {
    /// Number of paths that were actually read.
    pub fn files_read(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Loaded { .. }))
            .count()
    }
}

/// Loader that merges env files and applies them to an environment.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    paths: Vec<PathBuf>,
    options: LoadOptions,
}

impl EnvLoader {
    /// Create a loader for the default file with both policies disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file to the load order.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Append several files to the load order.
    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Replace both policies at once.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Allow replacing variables already present in the environment.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.options.overwrite = overwrite;
        self
    }

    /// Expand `${VAR}` references after merging.
    pub fn expand(mut self, expand: bool) -> Self {
        self.options.expand = expand;
        self
    }

    /// Current policies.
    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// Paths that will be read, with the default substituted for an empty list.
    pub fn paths(&self) -> Vec<PathBuf> {
        filenames_or_default(&self.paths)
    }

    /// Load into the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFileRead` if an existing file cannot be read.
    /// Missing files and directories are skipped.
    pub fn load(&self) -> Result<EnvMap, ConfigError> {
        self.load_into(&mut ProcessEnv)
    }

    /// Load into `env` and return the final values.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load`].
    pub fn load_into<E: EnvProvider + ?Sized>(&self, env: &mut E) -> Result<EnvMap, ConfigError> {
        Ok(self.load_with_report(env)?.values)
    }

    /// Load into `env` and describe what happened.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load`]. On error `env` has not been modified.
    pub fn load_with_report<E: EnvProvider + ?Sized>(
        &self,
        env: &mut E,
    ) -> Result<LoadReport, ConfigError> {
        let (merged, files) = self.merge_files()?;

        let values = if self.options.expand {
            expand_values(&merged, env)
        } else {
            merged
        };

        let (applied, preserved) = apply(&values, env, self.options.overwrite);

        tracing::debug!(
            keys = values.len(),
            applied = applied.len(),
            preserved = preserved.len(),
            "Applied env files"
        );

        Ok(LoadReport {
            values,
            files,
            applied,
            preserved,
        })
    }

    fn merge_files(&self) -> Result<(EnvMap, Vec<FileReport>), ConfigError> {
        let mut merged = EnvMap::new();
        let mut files = Vec::new();

        for path in self.paths() {
            let status = match read_env_file(&path) {
                FileOutcome::Loaded(entries) => {
                    tracing::debug!(
                        path = %path.display(),
                        entries = entries.len(),
                        "Loaded env file"
                    );
                    let count = entries.len();
                    merged.extend(entries.into_iter().map(KeyValue::into_pair));
                    FileStatus::Loaded { entries: count }
                }
                FileOutcome::Skipped(reason) => {
                    tracing::debug!(
                        path = %path.display(),
                        reason = %reason,
                        "Skipping env file"
                    );
                    FileStatus::Skipped(reason)
                }
                FileOutcome::Failed(source) => {
                    return Err(ConfigError::EnvFileRead { path, source });
                }
            };
            files.push(FileReport { path, status });
        }

        Ok((merged, files))
    }
}

/// Load `paths` in order into the process environment.
///
/// An empty slice loads the default `.env` file.
///
/// # Errors
///
/// Returns `ConfigError::EnvFileRead` if an existing file cannot be read.
pub fn load<P: AsRef<Path>>(paths: &[P], options: LoadOptions) -> Result<EnvMap, ConfigError> {
    EnvLoader::new()
        .with_paths(paths.iter().map(|p| p.as_ref().to_path_buf()))
        .with_options(options)
        .load()
}

/// Load the default `.env` file into the process environment.
///
/// # Errors
///
/// Returns `ConfigError::EnvFileRead` if `.env` exists but cannot be read.
pub fn load_default(options: LoadOptions) -> Result<EnvMap, ConfigError> {
    load::<&str>(&[], options)
}

fn filenames_or_default(paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![PathBuf::from(DEFAULT_ENV_FILE)]
    } else {
        paths.to_vec()
    }
}

/// Expand every merged value; lookups see the merged values first, then `env`.
fn expand_values<E: EnvProvider + ?Sized>(merged: &EnvMap, env: &E) -> EnvMap {
    let lookup = |name: &str| merged.get(name).cloned().or_else(|| env.get(name));
    merged
        .iter()
        .map(|(key, value)| (key.clone(), expand(value, &lookup)))
        .collect()
}

fn apply<E: EnvProvider + ?Sized>(
    values: &EnvMap,
    env: &mut E,
    overwrite: bool,
) -> (Vec<String>, Vec<String>) {
    let mut applied = Vec::new();
    let mut preserved = Vec::new();

    for (key, value) in values {
        if !overwrite && env.has(key) {
            preserved.push(key.clone());
            continue;
        }
        env.set(key, value);
        applied.push(key.clone());
    }

    (applied, preserved)
}
