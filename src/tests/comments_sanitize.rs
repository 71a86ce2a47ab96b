//! The input sanitiser: markdown fence extraction, comment stripping with
//! string/URL awareness, and balanced-substring extraction.

use super::*;

#[test]
fn json_tagged_fence_wins_over_plain_fence() {
    assert_eq!(r("```json\n{\"x\":1}\n```"), r#"{"x":1}"#);
}

#[test]
fn multiple_json_fences_are_concatenated_in_order() {
    let input = "```json\n{\"a\":1,\n```\nsome text\n```json\n\"b\":2}\n```";
    assert_eq!(r(input), r#"{"a":1,"b":2}"#);
}

#[test]
fn plain_fence_used_when_no_json_tagged_fence_exists() {
    assert_eq!(r("```\n[1,2,3]\n```"), "[1,2,3]");
}

#[test]
fn block_comment_between_members_is_removed() {
    assert_eq!(r("{\"a\": 1, /* note */ \"b\": 2}"), r#"{"a": 1, "b": 2}"#);
}

#[test]
fn line_comment_is_removed_but_url_scheme_survives() {
    assert_eq!(
        r("{ a: http://example.com // trailing note\n}"),
        r#"{"a": "http://example.com"}"#
    );
}

#[test]
fn largest_balanced_object_is_extracted_from_surrounding_prose() {
    let input = "noise before {\"a\":1,\"b\":{\"c\":2}} trailing noise";
    assert_eq!(r(input), r#"{"a":1,"b":{"c":2}}"#);
}

#[test]
fn first_balanced_array_is_extracted_when_no_object_exists() {
    let input = "here is the list: [1, 2, 3] enjoy";
    assert_eq!(r(input), "[1, 2, 3]");
}

#[test]
fn comment_marker_inside_a_string_is_not_stripped() {
    // The trailing comma forces the sanitiser/engine path; if the comment
    // stripper were not string-aware it would truncate the value at `//`.
    let out = r(r#"{"url": "http://example.com // not a comment",}"#);
    assert_eq!(out, r#"{"url": "http://example.com // not a comment"}"#);
}
