//! Tests for line splitting and document parsing.
//!
//! Responsibilities:
//! - Pin the observable behavior of `split_kv` for every quoting mode.
//! - Verify `parse_str` / `parse_reader` merge semantics within one document.

use super::*;
use std::io::Cursor;

fn kv(line: &str) -> Option<(String, String)> {
    split_kv(line).map(KeyValue::into_pair)
}

fn pair(key: &str, value: &str) -> Option<(String, String)> {
    Some((key.to_string(), value.to_string()))
}

#[test]
fn test_split_kv_table() {
    let cases: &[(&str, Option<(String, String)>)] = &[
        ("FOO=bar", pair("FOO", "bar")),
        ("FOO = bar", pair("FOO", "bar")),
        (r#"FOO="bar baz""#, pair("FOO", "bar baz")),
        ("FOO='bar # not comment'", pair("FOO", "bar # not comment")),
        ("FOO=bar # comment", pair("FOO", "bar")),
        (r"FOO=a\=b", pair("FOO", r"a\=b")),
        ("NOVAL", None),
    ];

    for (line, expected) in cases {
        assert_eq!(&kv(line), expected, "split_kv({line:?})");
    }
}

#[test]
fn test_comments_and_blank_lines_are_not_assignments() {
    assert_eq!(kv(""), None);
    assert_eq!(kv("   \t  "), None);
    assert_eq!(kv("# FOO=bar"), None);
    assert_eq!(kv("   # indented comment"), None);
}

#[test]
fn test_empty_key_is_rejected() {
    assert_eq!(kv("=value"), None);
    assert_eq!(kv("   = value"), None);
}

#[test]
fn test_empty_value_is_allowed() {
    assert_eq!(kv("FOO="), pair("FOO", ""));
    assert_eq!(kv("FOO=   "), pair("FOO", ""));
    assert_eq!(kv("FOO=# only a comment"), pair("FOO", ""));
}

#[test]
fn test_export_prefix_is_stripped() {
    assert_eq!(kv("export FOO=bar"), pair("FOO", "bar"));
    assert_eq!(kv("export\tFOO=bar"), pair("FOO", "bar"));
    // Not followed by whitespace, so it is part of the key.
    assert_eq!(kv("exportFOO=bar"), pair("exportFOO", "bar"));
    assert_eq!(kv("export=bar"), pair("export", "bar"));
}

#[test]
fn test_hash_without_preceding_space_is_literal() {
    assert_eq!(kv("URL=http://host/#anchor"), pair("URL", "http://host/#anchor"));
    assert_eq!(kv("FOO=a#b"), pair("FOO", "a#b"));
}

#[test]
fn test_escaped_hash_does_not_start_comment() {
    assert_eq!(kv(r"FOO=a \# b"), pair("FOO", r"a \# b"));
}

#[test]
fn test_double_quoted_escapes() {
    assert_eq!(kv(r#"FOO="a\nb""#), pair("FOO", "a\nb"));
    assert_eq!(kv(r#"FOO="tab\there""#), pair("FOO", "tab\there"));
    assert_eq!(kv(r#"FOO="cr\rlf""#), pair("FOO", "cr\rlf"));
    assert_eq!(kv(r#"FOO="say \"hi\"""#), pair("FOO", r#"say "hi""#));
    assert_eq!(kv(r#"FOO="back\\slash""#), pair("FOO", r"back\slash"));
    assert_eq!(kv(r#"FOO="keep\x""#), pair("FOO", r"keep\x"));
}

#[test]
fn test_double_quoted_hash_is_literal_and_trailer_ignored() {
    assert_eq!(kv(r#"FOO="a # b" # real comment"#), pair("FOO", "a # b"));
    assert_eq!(kv(r#"FOO="  padded  ""#), pair("FOO", "  padded  "));
}

#[test]
fn test_single_quoted_is_verbatim() {
    assert_eq!(kv(r"FOO='a\nb'"), pair("FOO", r"a\nb"));
    assert_eq!(kv("QUOTED='a#b'"), pair("QUOTED", "a#b"));
    assert_eq!(kv(r#"FOO='has "double" quotes'"#), pair("FOO", r#"has "double" quotes"#));
}

#[test]
fn test_unterminated_quote_falls_back_to_unquoted() {
    assert_eq!(kv(r#"FOO="open # comment"#), pair("FOO", "\"open"));
    assert_eq!(kv("FOO='open"), pair("FOO", "'open"));
}

#[test]
fn test_unquoted_values_convert_control_escapes() {
    assert_eq!(kv(r"ESCAPES=line\nbreak"), pair("ESCAPES", "line\nbreak"));
    assert_eq!(kv(r"FOO=a\tb\rc"), pair("FOO", "a\tb\rc"));
    // Escapes are converted after trailing whitespace is trimmed.
    assert_eq!(kv(r"FOO=ends\t   "), pair("FOO", "ends\t"));
}

#[test]
fn test_unquoted_trailing_whitespace_trimmed() {
    assert_eq!(kv("FOO=bar   "), pair("FOO", "bar"));
    assert_eq!(kv("FOO=bar baz  # c"), pair("FOO", "bar baz"));
}

#[test]
fn test_escaped_equals_in_key_is_part_of_key() {
    assert_eq!(kv(r"A\=B=c"), pair(r"A\=B", "c"));
}

#[test]
fn test_parse_str_basics() {
    let map = parse_str(
        r#"
# comment
export FOO=bar
BAZ="hello world"
RAW=val # inline comment
QUOTED='a#b'
ESCAPES=line\nbreak
"#,
    );

    assert_eq!(map.get("FOO").map(String::as_str), Some("bar"));
    assert_eq!(map.get("BAZ").map(String::as_str), Some("hello world"));
    assert_eq!(map.get("RAW").map(String::as_str), Some("val"));
    assert_eq!(map.get("QUOTED").map(String::as_str), Some("a#b"));
    assert_eq!(map.get("ESCAPES").map(String::as_str), Some("line\nbreak"));
    assert_eq!(map.len(), 5);
}

#[test]
fn test_parse_str_last_occurrence_wins() {
    let map = parse_str("FOO=first\nFOO=second\n");
    assert_eq!(map.get("FOO").map(String::as_str), Some("second"));
}

#[test]
fn test_parse_str_accepts_crlf() {
    let map = parse_str("A=1\r\nB=\"two\"\r\nC='three'\r\n");
    assert_eq!(map.get("A").map(String::as_str), Some("1"));
    assert_eq!(map.get("B").map(String::as_str), Some("two"));
    assert_eq!(map.get("C").map(String::as_str), Some("three"));
}

#[test]
fn test_parse_reader_matches_parse_str() {
    let content = "A=1\nB = 'x y'\n# skip\nNOVAL\nA=3\n";
    let from_reader = parse_reader(Cursor::new(content)).unwrap();
    assert_eq!(from_reader, parse_str(content));
}

#[test]
fn test_parse_entries_keeps_order_and_duplicates() {
    let entries = parse_entries(Cursor::new("B=1\nA=2\nB=3\n")).unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["B", "A", "B"]);
}

#[test]
fn test_parse_reader_skips_lines_that_are_not_utf8() {
    let bytes: &[u8] = b"# caf\xe9 settings\nA=\xff\xfe\nPORT=8080\r\nB=ok";
    let values = parse_reader(Cursor::new(bytes)).unwrap();
    assert_eq!(values.len(), 2, "got: {values:?}");
    assert_eq!(values["PORT"], "8080");
    assert_eq!(values["B"], "ok");
}

#[test]
fn test_parse_entries_strips_crlf_before_quotes() {
    let entries = parse_entries(Cursor::new("A=\"x\"\r\nB='y'\r\n")).unwrap();
    assert_eq!(entries[0].value, "x");
    assert_eq!(entries[1].value, "y");
}
