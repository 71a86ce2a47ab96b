//! The input sanitiser: markdown fence extraction, then comment stripping
//! with string/URL awareness, then, only if the result still doesn't
//! validate, extraction of the largest balanced object or first balanced
//! array.

use crate::logging::RepairEvent;
use crate::options::Options;
use memchr::memchr;

/// Runs the sanitiser pipeline. Fence extraction and comment removal can
/// both change the text's length, so log positions reported during this
/// phase are relative to the text as it stood at the moment of detection,
/// not to the original `input` passed to [`crate::repair`].
pub(crate) fn sanitize(input: &str, opts: &Options) -> String {
    let fenced = extract_fences(input);
    let stripped = strip_comments(&fenced, opts);
    if serde_json::from_str::<serde_json::Value>(&stripped).is_ok() {
        return stripped;
    }
    if let Some(obj) = largest_balanced_object(&stripped) {
        return obj;
    }
    if let Some(arr) = first_balanced_array(&stripped) {
        return arr;
    }
    stripped
}

/// Markdown fence extraction. ` ```json ... ``` ` fences win over plain
/// ` ``` ... ``` ` fences; when several of the winning kind exist, their
/// interiors are concatenated in order.
fn extract_fences(input: &str) -> String {
    if let Some(joined) = join_fences(input, Some("json")) {
        return joined;
    }
    if let Some(joined) = join_fences(input, None) {
        return joined;
    }
    input.to_string()
}

fn join_fences(input: &str, lang: Option<&str>) -> Option<String> {
    let mut bodies = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = input[pos..].find("```") {
        let start = pos + rel;
        let after_ticks = start + 3;
        let line_end = input[after_ticks..]
            .find(['\n', '\r'])
            .map(|i| after_ticks + i);
        let (tag, body_start) = match line_end {
            Some(nl) => {
                let mut body_start = nl + 1;
                if input[nl..].starts_with("\r\n") {
                    body_start = nl + 2;
                }
                (input[after_ticks..nl].trim(), body_start)
            }
            None => ("", after_ticks),
        };
        let Some(end_rel) = input[body_start..].find("```") else {
            break;
        };
        let body_end = body_start + end_rel;
        let matches_lang = match lang {
            Some(l) => tag.eq_ignore_ascii_case(l),
            None => true,
        };
        if matches_lang {
            bodies.push(&input[body_start..body_end]);
        }
        pos = body_end + 3;
    }
    if bodies.is_empty() {
        None
    } else {
        Some(bodies.join(""))
    }
}

/// Comment stripping: scans byte-by-byte, tracking string state and a
/// URL-scheme suppression rule for `//`. Output is built as raw bytes since
/// non-ASCII input is copied through verbatim.
fn strip_comments(input: &str, opts: &Options) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    let mut in_string = false;
    let mut string_quote = 0u8;
    let mut escape_pending = false;
    // Tracks a run of >=2 trailing alphabetic bytes, used only to recognise
    // scheme-looking runs like `http` before `://`.
    let mut alpha_run = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            out.push(b);
            if escape_pending {
                escape_pending = false;
            } else if b == b'\\' {
                escape_pending = true;
            } else if b == string_quote {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' || b == b'\'' {
            in_string = true;
            string_quote = b;
            alpha_run = 0;
            out.push(b);
            i += 1;
            continue;
        }

        if b == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            // URL suppression: a `//` immediately after `:` preceded by a
            // run of >=2 alphabetic bytes is scheme content, not a comment.
            let preceded_by_scheme = out.last() == Some(&b':') && alpha_run >= 2;
            if preceded_by_scheme {
                out.push(b'/');
                i += 1;
                alpha_run = 0;
                continue;
            }
            let before_ok = !out.is_empty() && !(out.last().copied().unwrap() as char).is_whitespace();
            let end = memchr(b'\n', &bytes[i..])
                .or_else(|| memchr(b'\r', &bytes[i..]))
                .map(|p| i + p)
                .unwrap_or(bytes.len());
            emit_event(opts, RepairEvent::CommentRemoved, i, input);
            let after_ok = bytes
                .get(end)
                .is_none_or(|&c| !(c as char).is_whitespace());
            splice_join(&mut out, before_ok, after_ok);
            i = end;
            alpha_run = 0;
            continue;
        }

        if b == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
            let before_ok = !out.is_empty() && !(out.last().copied().unwrap() as char).is_whitespace();
            let rest = &input[i + 2..];
            let end = rest.find("*/").map(|p| i + 2 + p + 2).unwrap_or(bytes.len());
            emit_event(opts, RepairEvent::CommentRemoved, i, input);
            let after_ok = bytes
                .get(end)
                .is_none_or(|&c| !(c as char).is_whitespace());
            splice_join(&mut out, before_ok, after_ok);
            i = end;
            alpha_run = 0;
            continue;
        }

        if b.is_ascii_alphabetic() {
            alpha_run += 1;
        } else if b != b':' {
            alpha_run = 0;
        }
        out.push(b);
        i += 1;
    }
    // Safe: every branch above copies either ASCII structural bytes or
    // verbatim slices/bytes of the original (valid UTF-8) input.
    String::from_utf8(out).expect("comment stripper preserves UTF-8 validity")
}

fn emit_event(opts: &Options, event: RepairEvent, pos: usize, input: &str) {
    if let Some(logger) = &opts.logger {
        let ctx = crate::logging::context_snippet(input, pos, opts.log_context_window);
        logger.borrow_mut().log(event, pos, &ctx);
    }
}

/// When a comment is removed, insert a single space if both sides are
/// non-whitespace (to avoid token merging), or drop one space if both sides
/// are already whitespace.
fn splice_join(out: &mut Vec<u8>, before_non_ws: bool, after_non_ws: bool) {
    if before_non_ws && after_non_ws {
        out.push(b' ');
    } else if !before_non_ws && !after_non_ws && out.last() == Some(&b' ') {
        out.pop();
    }
}

/// Scan for the largest balanced `{ ... }` substring that parses as JSON
/// (longest wins on ties), ignoring braces inside string literals.
fn largest_balanced_object(input: &str) -> Option<String> {
    largest_balanced(input, '{', '}')
}

fn first_balanced_array(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    for i in 0..bytes.len() {
        if bytes[i] != b'[' {
            continue;
        }
        if let Some(end) = find_balanced_end(input, i, '[', ']') {
            let candidate = &input[i..=end];
            if serde_json::from_str::<serde_json::Value>(candidate).is_ok() {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

fn largest_balanced(input: &str, open: char, close: char) -> Option<String> {
    let bytes = input.as_bytes();
    let mut best: Option<(usize, usize)> = None;
    for i in 0..bytes.len() {
        if bytes[i] != open as u8 {
            continue;
        }
        if let Some(end) = find_balanced_end(input, i, open, close) {
            let len = end - i;
            let better = match best {
                Some((bs, be)) => len > be - bs,
                None => true,
            };
            if better && serde_json::from_str::<serde_json::Value>(&input[i..=end]).is_ok() {
                best = Some((i, end));
            }
        }
    }
    best.map(|(s, e)| input[s..=e].to_string())
}

/// Find the byte index of the `close` that balances the `open` at `start`,
/// ignoring delimiters inside string literals. Backslash escapes suspend
/// quote matching for one byte.
fn find_balanced_end(input: &str, start: usize, open: char, close: char) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0i32;
    let mut i = start;
    let mut in_string = false;
    let mut quote = 0u8;
    let mut escape = false;
    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' || b == b'\'' {
            in_string = true;
            quote = b;
            i += 1;
            continue;
        }
        if b == open as u8 {
            depth += 1;
        } else if b == close as u8 {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}
