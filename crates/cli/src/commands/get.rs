//! Get command implementation.
//!
//! Responsibilities:
//! - Load the env files, then read a single variable through `EnvReader`.
//! - Convert `--default` to the requested kind before reading.
//!
//! Does NOT handle:
//! - Unset, empty or unparsable variables as errors: they print the default.
//!   Only `--required` turns an unset variable into a failure.

use std::time::Duration;

use anyhow::Result;
use envload_config::{EnvLoader, EnvReader, MemoryEnv, parse_bool, parse_duration};

use crate::commands::load_snapshot;
use crate::error::CliError;

/// Type a variable is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    Duration,
    List,
}

impl ValueKind {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "string" | "str" => Ok(ValueKind::String),
            "int" | "integer" => Ok(ValueKind::Int),
            "bool" | "boolean" => Ok(ValueKind::Bool),
            "duration" => Ok(ValueKind::Duration),
            "list" | "strings" => Ok(ValueKind::List),
            _ => anyhow::bail!(
                "Invalid kind: {}. Valid options: string, int, bool, duration, list",
                s
            ),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Duration => "duration",
            ValueKind::List => "list",
        }
    }
}

/// Options of one `get` invocation.
#[derive(Debug)]
pub struct GetRequest<'a> {
    pub key: &'a str,
    pub kind: &'a str,
    pub default: Option<&'a str>,
    pub separator: &'a str,
    pub required: bool,
}

pub fn run(loader: &EnvLoader, request: &GetRequest<'_>) -> Result<()> {
    let kind = ValueKind::from_str(request.kind)?;
    let (env, _) = load_snapshot(loader)?;
    let reader = EnvReader::new(&env);

    if request.required {
        reader.require_string(request.key)?;
    }

    println!("{}", render(&reader, kind, request)?);
    Ok(())
}

fn render(
    reader: &EnvReader<'_, MemoryEnv>,
    kind: ValueKind,
    request: &GetRequest<'_>,
) -> Result<String> {
    let key = request.key;
    let rendered = match kind {
        ValueKind::String => reader.string(key, request.default.unwrap_or_default()),
        ValueKind::Int => {
            let default = parse_default(kind, request.default, |s| s.parse::<i64>().ok())?;
            reader.int(key, default.unwrap_or(0)).to_string()
        }
        ValueKind::Bool => {
            let default = parse_default(kind, request.default, parse_bool)?;
            reader.boolean(key, default.unwrap_or(false)).to_string()
        }
        ValueKind::Duration => {
            let default = parse_default(kind, request.default, parse_duration)?;
            format!("{:?}", reader.duration(key, default.unwrap_or(Duration::ZERO)))
        }
        ValueKind::List => {
            let defaults: Vec<&str> = match request.default {
                None => Vec::new(),
                Some(value) if request.separator.is_empty() => vec![value],
                Some(value) => value.split(request.separator).map(str::trim).collect(),
            };
            reader.strings(key, request.separator, &defaults).join("\n")
        }
    };
    Ok(rendered)
}

fn parse_default<T>(
    kind: ValueKind,
    default: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, CliError> {
    default
        .map(|value| {
            parse(value).ok_or_else(|| CliError::InvalidDefault {
                kind: kind.name(),
                value: value.to_string(),
            })
        })
        .transpose()
}
