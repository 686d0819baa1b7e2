//! Shell formatter implementation.
//!
//! Responsibilities:
//! - Format the variable set as `export KEY='value'` lines for `eval`.
//! - Leave out keys a shell would not read as a single variable name.

use anyhow::Result;
use envload_config::EnvMap;

use crate::formatters::Formatter;

/// POSIX shell formatter.
pub struct ShellFormatter;

impl Formatter for ShellFormatter {
    fn format_vars(&self, vars: &EnvMap) -> Result<String> {
        let mut output = String::new();
        for (key, value) in vars {
            if !is_shell_name(key) {
                tracing::warn!(key = %key, "Skipping variable that is not a valid shell name");
                continue;
            }
            output.push_str(&format!("export {key}={}\n", single_quote(value)));
        }
        Ok(output)
    }
}

fn is_shell_name(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Wrap in single quotes; an embedded `'` becomes `'\''`.
fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_quote_escaping() {
        assert_eq!(single_quote("plain"), "'plain'");
        assert_eq!(single_quote(""), "''");
        assert_eq!(single_quote("it's"), r"'it'\''s'");
        assert_eq!(single_quote("$HOME \"x\""), "'$HOME \"x\"'");
    }

    #[test]
    fn test_shell_names() {
        assert!(is_shell_name("PATH"));
        assert!(is_shell_name("_private_1"));
        assert!(!is_shell_name(""));
        assert!(!is_shell_name("1ABC"));
        assert!(!is_shell_name("X;echo PWNED;Y"));
        assert!(!is_shell_name("A B"));
        assert!(!is_shell_name("$(id)"));
        assert!(!is_shell_name("CAFÉ"));
    }

    #[test]
    fn test_keys_that_are_not_shell_names_are_left_out() {
        let vars: EnvMap = [
            ("X;echo PWNED;Y".to_string(), "1".to_string()),
            ("`id`".to_string(), "2".to_string()),
            ("SAFE".to_string(), "3".to_string()),
        ]
        .into();

        assert_eq!(ShellFormatter.format_vars(&vars).unwrap(), "export SAFE='3'\n");
    }

    #[test]
    fn test_export_lines_in_key_order() {
        let vars: EnvMap = [
            ("B".to_string(), "two words".to_string()),
            ("A".to_string(), "1".to_string()),
        ]
        .into();

        assert_eq!(
            ShellFormatter.format_vars(&vars).unwrap(),
            "export A='1'\nexport B='two words'\n"
        );
    }
}
