//! Number grammar with exponent rollback and a fallback to unquoted-string-
//! value handling for a lone sign.

use super::{Engine, State};

impl<'a> Engine<'a> {
    pub(super) fn step_number(&mut self) {
        let start_pos = self.pos;
        let out_start = self.output.len();

        if matches!(self.bytes.get(self.pos), Some(b'+') | Some(b'-')) {
            self.output.push(self.bytes[self.pos]);
            self.pos += 1;
        }

        let mut has_digit = false;
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
            self.output.push(self.bytes[self.pos]);
            self.pos += 1;
            has_digit = true;
        }

        if !has_digit {
            // A lone sign with nothing following it is not a JSON number;
            // fall back to treating the run as an unquoted string value.
            self.output.truncate(out_start);
            self.pos = start_pos;
            self.handle_unquoted_string_value();
            return;
        }

        if self.bytes.get(self.pos) == Some(&b'.')
            && matches!(self.bytes.get(self.pos + 1), Some(b) if b.is_ascii_digit())
        {
            self.output.push(b'.');
            self.pos += 1;
            while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
                self.output.push(self.bytes[self.pos]);
                self.pos += 1;
            }
        }

        if matches!(self.bytes.get(self.pos), Some(b'e') | Some(b'E')) {
            let exp_out_start = self.output.len();
            self.output.push(self.bytes[self.pos]);
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+') | Some(b'-')) {
                self.output.push(self.bytes[self.pos]);
                self.pos += 1;
            }
            let mut exp_has_digit = false;
            while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
                self.output.push(self.bytes[self.pos]);
                self.pos += 1;
                exp_has_digit = true;
            }
            if !exp_has_digit {
                self.output.truncate(exp_out_start);
            }
        }

        self.state = State::ExpectingCommaOrEnd;
    }
}
