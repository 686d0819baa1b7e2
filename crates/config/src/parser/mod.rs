//! Line parser for `.env` files.
//!
//! Responsibilities:
//! - Split a single raw line into a key/value pair (`split_kv`).
//! - Apply quoting, escape and inline-comment rules to the value.
//! - Fold whole documents or readers into an `EnvMap` (last occurrence wins).
//!
//! Does NOT handle:
//! - `${VAR}` expansion (see `expand.rs`).
//! - Opening files or merging several files (see `loader`).
//! - Validating key names: any non-empty text before the first unescaped `=` is a key.
//!
//! Invariants:
//! - A returned `KeyValue` always has a non-empty, trimmed key.
//! - Comment lines, blank lines and lines without an unescaped `=` yield `None`.
//! - Reader input that is not valid UTF-8 is skipped line by line; only I/O errors fail.
//! - Parsing is linear in the line length; there is no backtracking.

mod scanner;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::io::BufRead;

/// Merged mapping of variable names to values.
pub type EnvMap = BTreeMap<String, String>;

/// A single assignment parsed from an env file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Variable name, trimmed and never empty.
    pub key: String,
    /// Value after quote and escape processing.
    pub value: String,
}

impl KeyValue {
    /// Consume the entry and return it as a `(key, value)` tuple.
    pub fn into_pair(self) -> (String, String) {
        (self.key, self.value)
    }
}

/// Split one raw line into a key/value pair.
///
/// Returns `None` for blank lines, comment lines (`# ...`), lines without an
/// unescaped `=`, and lines whose key would be empty.
///
/// ```
/// use envload_config::split_kv;
///
/// let kv = split_kv("export FOO = 'bar # kept'").unwrap();
/// assert_eq!(kv.key, "FOO");
/// assert_eq!(kv.value, "bar # kept");
///
/// assert!(split_kv("# just a comment").is_none());
/// assert!(split_kv("NOVAL").is_none());
/// ```
pub fn split_kv(line: &str) -> Option<KeyValue> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let line = strip_export(line);
    let split_at = scanner::find_unescaped_equals(line)?;

    let key = line[..split_at].trim();
    if key.is_empty() {
        return None;
    }

    let raw_value = line[split_at + 1..].trim_start();

    Some(KeyValue {
        key: key.to_string(),
        value: scanner::scan_value(raw_value),
    })
}

/// Parse every assignment in `content`, last occurrence of a key wins.
pub fn parse_str(content: &str) -> EnvMap {
    content
        .lines()
        .filter_map(split_kv)
        .map(KeyValue::into_pair)
        .collect()
}

/// Parse every assignment read from `reader`, last occurrence of a key wins.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails. Lines that are not
/// valid UTF-8 are skipped rather than reported.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<EnvMap> {
    Ok(parse_entries(reader)?
        .into_iter()
        .map(KeyValue::into_pair)
        .collect())
}

/// Collect the assignments read from `reader` in file order.
///
/// Duplicated keys are kept; callers decide how to merge them.
pub fn parse_entries<R: BufRead>(mut reader: R) -> std::io::Result<Vec<KeyValue>> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        match std::str::from_utf8(strip_line_ending(&buf)) {
            Ok(line) => entries.extend(split_kv(line)),
            Err(_) => tracing::debug!(line = line_number, "Skipping line that is not valid UTF-8"),
        }
    }
    Ok(entries)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Remove a leading `export` keyword when it is followed by whitespace.
fn strip_export(line: &str) -> &str {
    match line.strip_prefix("export") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}
