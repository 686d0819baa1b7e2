//! String conversions used by the typed accessors.
//!
//! Responsibilities:
//! - Parse boolean tokens and duration strings the way environment values are
//!   commonly written (`true`/`1`/`F`, `250ms`, `1h30m`, `1.5s`).
//!
//! Invariants:
//! - Parsers return `None` on any malformed input; they never panic.
//! - Durations are limited to `MAX_DURATION_NANOS` and cannot be negative
//!   (`-0` is accepted as zero).

use std::time::Duration;

use crate::constants::MAX_DURATION_NANOS;

/// Parse a boolean token.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a duration such as `300ms`, `-0`, `1.5h` or `2h45m10s`.
///
/// The grammar is a sequence of decimal numbers, each with an optional
/// fraction and a unit suffix (`ns`, `us`, `µs`, `μs`, `ms`, `s`, `m`, `h`),
/// optionally preceded by a sign. A bare `0` needs no unit.
///
/// ```
/// use std::time::Duration;
/// use envload_config::parse_duration;
///
/// assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
/// assert_eq!(parse_duration("1h30m"), Some(Duration::from_secs(5400)));
/// assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
/// assert_eq!(parse_duration("10"), None);
/// ```
pub fn parse_duration(value: &str) -> Option<Duration> {
    let (negative, mut rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_len: usize = after_fraction
            .chars()
            .take_while(|c| *c != '.' && !c.is_ascii_digit())
            .map(char::len_utf8)
            .sum();
        if unit_len == 0 {
            return None;
        }
        let scale = unit_nanos(&after_fraction[..unit_len])?;
        rest = &after_fraction[unit_len..];

        let whole_value: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let mut nanos = whole_value.checked_mul(scale)?;
        nanos = nanos.checked_add(fraction_nanos(fraction, scale))?;

        total = total.checked_add(nanos)?;
        if total > MAX_DURATION_NANOS {
            return None;
        }
    }

    if negative && total != 0 {
        return None;
    }
    Some(Duration::from_nanos(u64::try_from(total).ok()?))
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 3_600 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// Nanoseconds contributed by the digits after the decimal point, truncated.
fn fraction_nanos(fraction: &str, scale: u128) -> u128 {
    // Digits past this point cannot change the result at nanosecond precision
    // for the largest unit, and keep the arithmetic inside u128.
    const MAX_FRACTION_DIGITS: usize = 24;

    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return 0;
    }
    let numerator: u128 = digits.parse().unwrap_or(0);
    let denominator = 10u128.pow(digits.len() as u32);
    numerator * scale / denominator
}
