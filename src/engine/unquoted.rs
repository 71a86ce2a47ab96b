//! Unquoted string values in object-value position.

use super::string::{append_unicode_escape, quote_starts_key};
use super::{is_ascii_ws, Engine, State};
use crate::logging::RepairEvent;

impl<'a> Engine<'a> {
    pub(super) fn handle_unquoted_string_value(&mut self) {
        let start = self.pos;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if matches!(b, b',' | b'}' | b']' | b'"' | b'\'') {
                break;
            }
            self.pos += 1;
        }
        let collected = &self.input[start..self.pos];
        let trimmed = collected.trim_end_matches(|c: char| c.is_ascii() && is_ascii_ws(c as u8));
        let stop = self.bytes.get(self.pos).copied();

        if is_truncated_keyword_prefix(trimmed) && rest_is_only_closers(&self.bytes[self.pos..]) {
            self.emit_missing_value();
            self.state = State::ExpectingCommaOrEnd;
            return;
        }

        if matches!(stop, Some(b'"') | Some(b'\'')) && quote_starts_key(self.bytes, self.pos) {
            self.output.push(b'"');
            escape_into(&mut self.output, trimmed);
            self.output.push(b'"');
            self.output.extend_from_slice(b", ");
            self.log(RepairEvent::CommaInserted);
            self.state = State::InObjectKey;
            return;
        }

        if !trimmed.is_empty() {
            self.output.push(b'"');
            escape_into(&mut self.output, trimmed);
            self.output.push(b'"');
        }
        self.state = State::ExpectingCommaOrEnd;
    }
}

fn is_truncated_keyword_prefix(s: &str) -> bool {
    if !s.is_ascii() || s.is_empty() || s.len() > 4 {
        return false;
    }
    let lower = s.to_ascii_lowercase();
    matches!(
        lower.as_str(),
        "t" | "tr" | "tru" | "f" | "fa" | "fal" | "fals" | "n" | "nu" | "nul"
    )
}

fn rest_is_only_closers(rest: &[u8]) -> bool {
    rest.iter()
        .all(|&b| matches!(b, b'}' | b']' | b' ' | b'\t' | b'\r' | b'\n'))
}

fn escape_into(out: &mut Vec<u8>, s: &str) {
    for ch in s.chars() {
        match ch {
            '\\' | '"' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            c if (c as u32) < 0x80 => out.push(c as u8),
            c => append_unicode_escape(out, c),
        }
    }
}
