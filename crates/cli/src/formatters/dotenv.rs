//! dotenv formatter implementation.
//!
//! Responsibilities:
//! - Format the variable set as `KEY=value` lines.
//! - Double-quote and escape values the parser would otherwise change.
//! - Leave out keys the parser would read back as a different key.

use anyhow::Result;
use envload_config::{EnvMap, split_kv};

use crate::formatters::Formatter;

/// dotenv formatter.
pub struct DotenvFormatter;

impl Formatter for DotenvFormatter {
    fn format_vars(&self, vars: &EnvMap) -> Result<String> {
        let mut output = String::new();
        for (key, value) in vars {
            let line = format_line(key, value);
            if !parses_back(&line, key, value) {
                tracing::warn!(key = %key, "Skipping variable that cannot be written as a dotenv line");
                continue;
            }
            output.push_str(&line);
            output.push('\n');
        }
        Ok(output)
    }
}

fn format_line(key: &str, value: &str) -> String {
    let mut line = String::with_capacity(key.len() + value.len() + 1);
    line.push_str(key);
    line.push('=');
    if needs_quotes(value) {
        push_double_quoted(&mut line, value);
    } else {
        line.push_str(value);
    }
    line
}

/// Keys such as `export A` or `#A` change meaning when re-parsed.
fn parses_back(line: &str, key: &str, value: &str) -> bool {
    split_kv(line).is_some_and(|kv| kv.key == key && kv.value == value)
}

/// Whether an unquoted value would not parse back unchanged.
fn needs_quotes(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '#' | '"' | '\'' | '\\'))
}

fn push_double_quoted(output: &mut String, value: &str) {
    output.push('"');
    for c in value.chars() {
        match c {
            '\\' => output.push_str(r"\\"),
            '"' => output.push_str("\\\""),
            '\n' => output.push_str(r"\n"),
            '\r' => output.push_str(r"\r"),
            '\t' => output.push_str(r"\t"),
            other => output.push(other),
        }
    }
    output.push('"');
}
