//! Environment providers the loader reads from and writes to.
//!
//! Responsibilities:
//! - Define the `EnvProvider` capability (get / set / has).
//! - Bind it to the live process environment (`ProcessEnv`).
//! - Offer an isolated, map-backed instance (`MemoryEnv`) for tests and child processes.
//!
//! Does NOT handle:
//! - Locking: `ProcessEnv` mutates global state and callers must serialize access.
//! - Parsing or merging env files (see `parser` and `loader`).
//!
//! Invariants:
//! - `ProcessEnv::set` is the only place in the workspace that calls `std::env::set_var`.
//! - Keys the platform cannot store are skipped with a warning instead of panicking.
//! - `has` is true for every variable that is set, even when `get` cannot return
//!   its value because it is not valid UTF-8.

use std::collections::{BTreeMap, BTreeSet};

/// Read/write access to a set of environment variables.
pub trait EnvProvider {
    /// Current value of `key`, or `None` if unset or not valid UTF-8.
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: &str);

    /// Whether `key` is present, even with an empty value.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<E: EnvProvider + ?Sized> EnvProvider for &mut E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn has(&self, key: &str) -> bool {
        (**self).has(key)
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if !is_storable_key(key) {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if !is_storable_key(key) || value.contains('\0') {
            tracing::warn!(
                key = %key,
                "Skipping variable the process environment cannot store"
            );
            return;
        }
        // SAFETY: the loader is the only writer during a load and callers are
        // documented to not mutate the environment from other threads meanwhile.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn has(&self, key: &str) -> bool {
        is_storable_key(key) && std::env::var_os(key).is_some()
    }
}

/// `std::env::set_var` panics on these keys, and `var` can never find them.
fn is_storable_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.contains('\0')
}

/// An isolated environment backed by an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
    /// Keys that are set but whose value is not valid UTF-8.
    unreadable: BTreeSet<String>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name is not valid UTF-8 are left out. A variable whose
    /// value is not valid UTF-8 still counts as present for `has`, so loading
    /// without overwrite leaves it alone.
    pub fn from_process() -> Self {
        let mut env = Self::new();
        for (key, value) in std::env::vars_os() {
            let Ok(key) = key.into_string() else {
                continue;
            };
            match value.into_string() {
                Ok(value) => {
                    env.vars.insert(key, value);
                }
                Err(_) => {
                    env.unreadable.insert(key);
                }
            }
        }
        env
    }

    /// All variables with a UTF-8 value, ordered by name.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Consume the environment and return its variables.
    pub fn into_vars(self) -> BTreeMap<String, String> {
        self.vars
    }
}

impl EnvProvider for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.unreadable.remove(key);
        self.vars.insert(key.to_string(), value.to_string());
    }

    fn has(&self, key: &str) -> bool {
        self.vars.contains_key(key) || self.unreadable.contains(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            unreadable: BTreeSet::new(),
        }
    }
}
