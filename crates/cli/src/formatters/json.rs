//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format the variable set as a pretty-printed JSON object.

use anyhow::Result;
use envload_config::EnvMap;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_vars(&self, vars: &EnvMap) -> Result<String> {
        Ok(serde_json::to_string_pretty(vars)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_object_roundtrip() {
        let vars: EnvMap = [
            ("A".to_string(), "1".to_string()),
            ("QUOTE".to_string(), "say \"hi\"\n".to_string()),
        ]
        .into();

        let output = JsonFormatter.format_vars(&vars).unwrap();
        let parsed: EnvMap = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vars);
        assert!(output.starts_with("{\n"));
    }
}
