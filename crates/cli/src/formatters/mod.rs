//! Output formatters for the merged variable set.
//!
//! Responsibilities:
//! - Provide the `show` output formats: dotenv, JSON and shell.
//! - Implement the `Formatter` trait for each format.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Variables are emitted in key order.
//! - dotenv output parses back to the same mapping with the loader's own parser;
//!   a key that cannot be written that way is left out with a warning.
//! - Shell output is safe to `eval` in a POSIX shell: values are single-quoted and
//!   keys that are not shell names (`[A-Za-z_][A-Za-z0-9_]*`) are left out with a warning.

use anyhow::Result;
use envload_config::EnvMap;

mod dotenv;
mod json;
mod shell;

pub use dotenv::DotenvFormatter;
pub use json::JsonFormatter;
pub use shell::ShellFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dotenv,
    Json,
    Shell,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dotenv" | "env" => Ok(OutputFormat::Dotenv),
            "json" => Ok(OutputFormat::Json),
            "shell" | "sh" => Ok(OutputFormat::Shell),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: dotenv, json, shell",
                s
            ),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the merged variables.
    fn format_vars(&self, vars: &EnvMap) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Dotenv => Box::new(DotenvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Shell => Box::new(ShellFormatter),
    }
}
