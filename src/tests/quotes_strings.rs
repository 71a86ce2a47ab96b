//! String sub-machine behaviour: single/smart-quote conversion, the
//! embedded-quote heuristic, the doubled-quote key pattern, and the
//! unclosed-string heuristic.

use super::*;

#[test]
fn embedded_quote_inside_value_is_escaped() {
    assert_eq!(
        r(r#"{"note": "she said "hi" loudly"}"#),
        r#"{"note": "she said \"hi\" loudly"}"#
    );
}

#[test]
fn quote_followed_by_new_key_closes_the_string() {
    // Also covered in scenarios.rs; repeated here under its heuristic name
    // for discoverability.
    assert_eq!(
        r(r#"{"key1": "v1" "key2": "v2"}"#),
        r#"{"key1": "v1","key2": "v2"}"#
    );
}

#[test]
fn doubled_quote_key_pattern() {
    assert_eq!(r(r#"{""name"": "Alice"}"#), r#"{"name": "Alice"}"#);
}

#[test]
fn smart_quotes_are_converted() {
    let out = r("{\u{201c}key\u{201d}: \u{2018}value\u{2019}}");
    assert_eq!(out, r#"{"key": "value"}"#);
}

#[test]
fn unclosed_array_string_closes_at_bracket() {
    assert_eq!(r(r#"["unterminated]"#), r#"["unterminated"]"#);
}

#[test]
fn single_quote_upgraded_when_embedded_double_quote_present() {
    // A literal `"` inside a single-quoted string is escaped, and the
    // delimiter is upgraded to `"` on close.
    assert_eq!(r(r#"{'a': 'He said "hi"'}"#), r#"{"a": "He said \"hi\""}"#);
}

#[test]
fn escape_sequences_pass_through_an_unclosed_string() {
    // The missing closing quote forces this through the engine rather than
    // the idempotence fast path, while the `\n` escape must survive intact.
    assert_eq!(r(r#"{"a": "line\nbreak"#), r#"{"a": "line\nbreak"}"#);
}

#[test]
fn truncated_unicode_escape_is_emitted_literally() {
    // A truncated `\u26` is emitted as the literal text `\u26`, never a
    // best-effort decoded character.
    let out = r(r#"{"x": "\u26"#);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["x"], "\\u26");
}
