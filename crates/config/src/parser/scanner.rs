//! Escape-aware value scanner.
//!
//! The value of an assignment is scanned once, left to right, by a small
//! state machine. A quoted value that never closes is rescanned as unquoted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    DoubleQuoted,
    SingleQuoted,
    Comment,
}

/// Result of one scan over a raw value.
#[derive(Debug, PartialEq, Eq)]
enum Scan {
    /// A quoted value reached its closing quote.
    Closed(String),
    /// Unquoted text; the value is `raw[..end]` before trimming and unescaping.
    Unquoted { end: usize },
    /// An opening quote without a matching close.
    Unterminated,
}

/// Byte index of the first `=` not preceded by an odd run of backslashes.
pub(super) fn find_unescaped_equals(line: &str) -> Option<usize> {
    let mut backslashes = 0usize;
    for (index, byte) in line.bytes().enumerate() {
        match byte {
            b'\\' => backslashes += 1,
            b'=' if backslashes % 2 == 0 => return Some(index),
            _ => backslashes = 0,
        }
    }
    None
}

/// Turn the raw text after `=` (leading whitespace already trimmed) into a value.
pub(super) fn scan_value(raw: &str) -> String {
    let initial = match raw.chars().next() {
        Some('"') => State::DoubleQuoted,
        Some('\'') => State::SingleQuoted,
        _ => State::Unquoted,
    };

    let end = match scan(raw, initial) {
        Scan::Closed(value) => return value,
        Scan::Unquoted { end } => end,
        Scan::Unterminated => match scan(raw, State::Unquoted) {
            Scan::Unquoted { end } => end,
            _ => raw.len(),
        },
    };

    unescape_controls(raw[..end].trim_end())
}

fn scan(raw: &str, initial: State) -> Scan {
    let body_start = if initial == State::Unquoted { 0 } else { 1 };
    let mut state = initial;
    let mut out = String::new();
    let mut cut = raw.len();
    // Start of value counts as whitespace so a leading `#` opens a comment.
    let mut after_space = true;
    let mut chars = raw[body_start..].char_indices();

    while let Some((offset, c)) = chars.next() {
        match (state, c) {
            (State::DoubleQuoted, '"') | (State::SingleQuoted, '\'') => {
                return Scan::Closed(out);
            }
            (State::DoubleQuoted, '\\') => match chars.next() {
                Some((_, escaped)) => push_quoted_escape(&mut out, escaped),
                None => out.push('\\'),
            },
            (State::DoubleQuoted | State::SingleQuoted, _) => out.push(c),
            (State::Unquoted, '#') if after_space => {
                cut = body_start + offset;
                state = State::Comment;
                break;
            }
            (State::Unquoted, '\\') => {
                chars.next();
                after_space = false;
            }
            (State::Unquoted, _) => after_space = c.is_whitespace(),
            (State::Comment, _) => break,
        }
    }

    match state {
        State::Unquoted | State::Comment => Scan::Unquoted { end: cut },
        State::DoubleQuoted | State::SingleQuoted => Scan::Unterminated,
    }
}

/// Escapes recognised between double quotes.
fn push_quoted_escape(out: &mut String, escaped: char) {
    match escaped {
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        '"' | '\\' => out.push(escaped),
        other => {
            out.push('\\');
            out.push(other);
        }
    }
}

/// Convert `\n`, `\r` and `\t` in unquoted text; every other backslash pair is kept.
fn unescape_controls(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
