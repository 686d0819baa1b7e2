//! `${VAR}` expansion for loaded values.
//!
//! Responsibilities:
//! - Replace every `${name}` marker with the value returned by a lookup.
//!
//! Does NOT handle:
//! - Bare `$NAME` references, default-value syntax (`${A:-b}`) or command substitution.
//! - Deciding where values come from (the loader supplies the lookup).
//!
//! Invariants:
//! - Unknown names expand to the empty string; expansion never fails.
//! - Expansion is single-pass: substituted text is never rescanned.
//! - An unterminated `${` and everything after it is copied through literally.

/// Expand every `${name}` in `input` using `lookup`.
///
/// ```
/// use envload_config::expand;
///
/// let lookup = |name: &str| match name {
///     "A" => Some("apple".to_string()),
///     "B" => Some("banana".to_string()),
///     _ => None,
/// };
/// assert_eq!(expand("${A}-${B}-${MISSING}", lookup), "apple-banana-");
/// ```
pub fn expand<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after_marker = &rest[start + 2..];

        let Some(close) = after_marker.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        if let Some(value) = lookup(&after_marker[..close]) {
            out.push_str(&value);
        }
        rest = &after_marker[close + 1..];
    }

    out.push_str(rest);
    out
}
