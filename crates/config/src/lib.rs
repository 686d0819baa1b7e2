//! Layered `.env` loading for process configuration.
//!
//! This crate parses `.env`-style files, merges several of them in order,
//! expands `${VAR}` references and applies the result to the process
//! environment (or any other [`EnvProvider`]).
//!
//! ```no_run
//! use envload_config::{EnvLoader, env_int};
//!
//! let values = EnvLoader::new()
//!     .with_path(".env")
//!     .with_path(".env.local")
//!     .expand(true)
//!     .load()?;
//! println!("loaded {} variables", values.len());
//!
//! let port = env_int("PORT", 8080);
//! # let _ = port;
//! # Ok::<(), envload_config::ConfigError>(())
//! ```

pub mod constants;
mod convert;
mod expand;
mod loader;
mod parser;
mod provider;

pub use convert::{parse_bool, parse_duration};
pub use expand::expand;
pub use loader::{
    ConfigError, EnvLoader, EnvReader, FileReport, FileStatus, LoadOptions, LoadReport,
    SkipReason, env_bool, env_duration, env_int, env_string, env_strings, load, load_default,
    must_env_string,
};
pub use parser::{EnvMap, KeyValue, parse_entries, parse_reader, parse_str, split_kv};
pub use provider::{EnvProvider, MemoryEnv, ProcessEnv};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
