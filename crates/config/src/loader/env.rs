//! Typed reads of environment variables.
//!
//! Responsibilities:
//! - Read a variable from an `EnvProvider` and convert it to a string, integer,
//!   boolean, duration or string list.
//! - Provide process-environment shortcuts (`env_string`, `env_int`, ...).
//!
//! Does NOT handle:
//! - Loading env files (see `builder.rs`).
//!
//! Invariants:
//! - Unset or empty variables return the caller's default unchanged.
//! - Values that fail to parse return the default; no error is surfaced.
//! - Only `require_string` / `must_string` treat an unset variable as a failure.

use std::time::Duration;

use super::error::ConfigError;
use crate::convert::{parse_bool, parse_duration};
use crate::provider::{EnvProvider, ProcessEnv};

/// Typed view over an environment provider.
pub struct EnvReader<'a, E: EnvProvider + ?Sized> {
    env: &'a E,
}

impl<'a, E: EnvProvider + ?Sized> EnvReader<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// The raw value, with empty treated as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.env.get(key).filter(|value| !value.is_empty())
    }

    pub fn string(&self, key: &str, default: &str) -> String {
        self.non_empty(key).unwrap_or_else(|| default.to_string())
    }

    /// Base-10 integer with an optional sign.
    pub fn int(&self, key: &str, default: i64) -> i64 {
        self.non_empty(key)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    /// See [`parse_bool`] for the accepted tokens.
    pub fn boolean(&self, key: &str, default: bool) -> bool {
        self.non_empty(key)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(default)
    }

    /// See [`parse_duration`] for the accepted grammar.
    pub fn duration(&self, key: &str, default: Duration) -> Duration {
        self.non_empty(key)
            .and_then(|value| parse_duration(&value))
            .unwrap_or(default)
    }

    /// Split on `separator` and trim each item.
    ///
    /// An empty separator splits the value into single characters.
    pub fn strings(&self, key: &str, separator: &str, default: &[&str]) -> Vec<String> {
        let Some(value) = self.non_empty(key) else {
            return default.iter().map(|s| s.to_string()).collect();
        };

        if separator.is_empty() {
            return value
                .chars()
                .map(|c| if c.is_whitespace() { String::new() } else { c.to_string() })
                .collect();
        }

        value
            .split(separator)
            .map(|item| item.trim().to_string())
            .collect()
    }

    /// The value of `key`, which must be set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` when the variable is unset and
    /// `ConfigError::InvalidEnvValue` when it is set to a value that is not
    /// valid UTF-8.
    pub fn require_string(&self, key: &str) -> Result<String, ConfigError> {
        match self.env.get(key) {
            Some(value) => Ok(value),
            None if self.env.has(key) => Err(ConfigError::InvalidEnvValue(key.to_string())),
            None => Err(ConfigError::MissingEnvVar(key.to_string())),
        }
    }

    /// The value of `key`, panicking when it is unset.
    ///
    /// # Panics
    ///
    /// Panics if the variable is not set or not valid UTF-8. Use this only
    /// for configuration the program cannot start without.
    pub fn must_string(&self, key: &str) -> String {
        match self.require_string(key) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

/// `EnvReader::string` over the process environment.
pub fn env_string(key: &str, default: &str) -> String {
    EnvReader::new(&ProcessEnv).string(key, default)
}

/// `EnvReader::int` over the process environment.
pub fn env_int(key: &str, default: i64) -> i64 {
    EnvReader::new(&ProcessEnv).int(key, default)
}

/// `EnvReader::boolean` over the process environment.
pub fn env_bool(key: &str, default: bool) -> bool {
    EnvReader::new(&ProcessEnv).boolean(key, default)
}

/// `EnvReader::duration` over the process environment.
pub fn env_duration(key: &str, default: Duration) -> Duration {
    EnvReader::new(&ProcessEnv).duration(key, default)
}

/// `EnvReader::strings` over the process environment.
pub fn env_strings(key: &str, separator: &str, default: &[&str]) -> Vec<String> {
    EnvReader::new(&ProcessEnv).strings(key, separator, default)
}

/// `EnvReader::must_string` over the process environment.
///
/// # Panics
///
/// Panics if the variable is not set.
pub fn must_env_string(key: &str) -> String {
    EnvReader::new(&ProcessEnv).must_string(key)
}
