//! The `Options` flags: `omit_empty_values`, `omit_incomplete_strings`, and
//! `ensure_ascii`.

use super::*;

#[test]
fn omit_empty_values_deletes_key_on_missing_colon() {
    let opts = Options {
        omit_empty_values: true,
        ..Options::default()
    };
    let out = repair(r#"{"a": 1, "b"}"#, &opts).unwrap();
    assert_eq!(out, r#"{"a": 1}"#);
}

#[test]
fn omit_empty_values_deletes_key_on_truncated_keyword() {
    let opts = Options {
        omit_empty_values: true,
        ..Options::default()
    };
    let out = repair(r#"{"a": 1, "active": tru"#, &opts).unwrap();
    assert_eq!(out, r#"{"a": 1}"#);
}

#[test]
fn default_missing_value_is_empty_string() {
    let out = repair(r#"{"a": 1, "b"}"#, &Options::default()).unwrap();
    assert_eq!(out, r#"{"a": 1, "b":""}"#);
}

#[test]
fn omit_incomplete_strings_deletes_the_unterminated_key() {
    let opts = Options {
        omit_incomplete_strings: true,
        ..Options::default()
    };
    let out = repair(r#"{"name": "John", "bio": "Incomplete"#, &opts).unwrap();
    assert_eq!(out, r#"{"name": "John"}"#);
}

#[test]
fn default_unterminated_string_is_closed_not_deleted() {
    let out = repair(r#"{"name": "John", "bio": "Incomplete"#, &Options::default()).unwrap();
    assert_eq!(out, r#"{"name": "John", "bio": "Incomplete"}"#);
}

#[test]
fn ensure_ascii_default_escapes_non_ascii() {
    // Single quotes force the engine path even though the text is
    // otherwise well-formed.
    let out = repair("{'city': 'caf\u{e9}'}", &Options::default()).unwrap();
    assert!(out.contains("\\u00e9"));
    assert!(!out.contains('\u{e9}'));
}

#[test]
fn ensure_ascii_false_reencodes_literal_unicode() {
    let opts = Options {
        ensure_ascii: false,
        ..Options::default()
    };
    let out = repair("{'city': 'caf\u{e9}'}", &opts).unwrap();
    assert!(out.contains('\u{e9}'));
    assert!(!out.contains("\\u00e9"));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["city"], "caf\u{e9}");
}

#[test]
fn ensure_ascii_does_not_apply_to_already_valid_input() {
    // The idempotence fast path bypasses the engine entirely, so a
    // well-formed document keeps its literal Unicode regardless of the
    // flag.
    let input = "{\"city\": \"caf\u{e9}\"}";
    let opts = Options {
        ensure_ascii: true,
        ..Options::default()
    };
    assert_eq!(repair(input, &opts).unwrap(), input);
}
