//! String sub-machine, its two bounded-lookahead heuristics for embedded and
//! unclosed quotes, and escape handling.

use super::{is_ascii_ws, smart_quote_len, Engine, State};
use crate::logging::RepairEvent;

impl<'a> Engine<'a> {
    pub(super) fn open_string(&mut self, delim_len: usize, ascii_delim: u8, before: State) {
        if delim_len > 1 || ascii_delim == b'\'' {
            self.log(RepairEvent::QuoteConverted);
        }
        self.string_delim = if delim_len > 1 { b'"' } else { ascii_delim };
        self.output.push(b'"');
        self.pos += delim_len;
        self.in_string = true;
        self.state_before_string = before;
        self.state = State::InString;
    }

    fn close_string(&mut self) {
        self.output.push(b'"');
        self.in_string = false;
        if self.state_before_string == State::InObjectKey {
            self.state = State::ExpectingColon;
        } else {
            self.state = State::ExpectingCommaOrEnd;
            self.current_key_start = None;
        }
    }

    pub(super) fn step_string(&mut self) {
        let b = self.bytes[self.pos];

        if b == b'"' && self.string_delim == b'\'' {
            self.output.extend_from_slice(b"\\\"");
            self.pos += 1;
            return;
        }

        let smart_len = smart_quote_len(self.bytes, self.pos);
        let ascii_match = b == self.string_delim;

        if ascii_match || smart_len.is_some() {
            if ascii_match
                && self.state_before_string == State::InObjectValue
                && embedded_quote_is_embedded(self.bytes, self.pos)
            {
                self.output.extend_from_slice(b"\\\"");
                self.pos += 1;
                return;
            }
            self.close_string();
            self.pos += smart_len.unwrap_or(1);
            return;
        }

        if b == b'\\' {
            self.state = State::InStringEscape;
            self.pos += 1;
            return;
        }

        if b == b'}' || b == b']' {
            if unclosed_string_is_unclosed(self.bytes, self.pos, self.string_delim, b) {
                self.close_string();
            } else {
                self.output.push(b);
                self.pos += 1;
            }
            return;
        }

        if b < 0x80 {
            self.output.push(b);
            self.pos += 1;
        } else {
            let ch = self.input[self.pos..].chars().next().unwrap();
            append_unicode_escape(&mut self.output, ch);
            self.pos += ch.len_utf8();
        }
    }

    pub(super) fn step_escape(&mut self) {
        let c = self.bytes[self.pos];
        match c {
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                self.output.push(b'\\');
                self.output.push(c);
                self.pos += 1;
            }
            b'u' => {
                let hex = self.bytes.get(self.pos + 1..self.pos + 5);
                if let Some(hex) = hex.filter(|h| h.iter().all(u8::is_ascii_hexdigit)) {
                    self.output.extend_from_slice(b"\\u");
                    self.output.extend_from_slice(hex);
                    self.pos += 5;
                } else {
                    // Truncated or invalid `\u` escape: the backslash
                    // becomes a literal one, so it must be re-escaped; `u`
                    // itself is emitted literally, and the remaining bytes
                    // resume normal string processing.
                    self.output.extend_from_slice(b"\\\\u");
                    self.pos += 1;
                }
            }
            _ => {
                self.output.extend_from_slice(b"\\\\");
                self.output.push(c);
                self.pos += 1;
            }
        }
        self.state = State::InString;
    }
}

pub(crate) fn append_unicode_escape(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u16; 2];
    for unit in c.encode_utf16(&mut buf) {
        out.extend_from_slice(format!("\\u{:04x}", unit).as_bytes());
    }
}

/// `p` is the position of an ASCII quote inside an object value; decides
/// whether it is embedded (should be escaped) rather than closing the
/// string.
fn embedded_quote_is_embedded(bytes: &[u8], p: usize) -> bool {
    let mut i = p + 1;
    while i < bytes.len() && is_ascii_ws(bytes[i]) {
        i += 1;
    }
    let Some(&c) = bytes.get(i) else {
        return false;
    };
    match c {
        b',' | b'}' | b']' | b':' => false,
        b'"' | b'\'' => !quote_starts_key(bytes, i),
        _ if c.is_ascii_alphabetic() || c == b'_' || c == b'.' => {
            let mut j = i;
            loop {
                let Some(&cj) = bytes.get(j) else {
                    return true;
                };
                match cj {
                    b':' => return !is_identifier(&bytes[i..j]),
                    b',' | b'}' | b']' => return true,
                    b'"' | b'\'' => return !quote_starts_key(bytes, j),
                    _ => j += 1,
                }
            }
        }
        _ => false,
    }
}

fn is_identifier(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && bytes
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// True if the quote at `pos` opens a `"key":` pattern.
pub(crate) fn quote_starts_key(bytes: &[u8], pos: usize) -> bool {
    let q = bytes[pos];
    let mut i = pos + 1;
    let mut escape = false;
    while i < bytes.len() {
        let b = bytes[i];
        if escape {
            escape = false;
        } else if b == b'\\' {
            escape = true;
        } else if b == q {
            break;
        }
        i += 1;
    }
    if i >= bytes.len() {
        return false;
    }
    i += 1;
    while i < bytes.len() && is_ascii_ws(bytes[i]) {
        i += 1;
    }
    bytes.get(i) == Some(&b':')
}

/// Looks ahead from a structural byte encountered mid-string to decide
/// whether the string was really left unclosed.
fn unclosed_string_is_unclosed(bytes: &[u8], pos: usize, delim: u8, structural: u8) -> bool {
    let mut i = pos + 1;
    while i < bytes.len() {
        let b = bytes[i];
        if b == structural {
            return true;
        }
        if b == delim {
            return false;
        }
        i += 1;
    }
    true
}
