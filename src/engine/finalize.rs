//! End-of-input closing logic: closes any still-open construct and makes
//! sure the result is strict JSON.

use super::{Engine, State};
use crate::error::RepairError;
use crate::logging::RepairEvent;

impl<'a> Engine<'a> {
    pub(super) fn finalize(mut self) -> Result<String, RepairError> {
        if self.in_string {
            if self.opts.omit_incomplete_strings && self.state_before_string == State::InObjectValue {
                self.remove_current_key();
            } else {
                self.output.push(b'"');
                if self.state_before_string == State::InObjectKey {
                    self.state = State::ExpectingColon;
                } else {
                    self.state = State::ExpectingCommaOrEnd;
                    self.current_key_start = None;
                }
                self.log(RepairEvent::UnclosedStringClosed);
            }
            self.in_string = false;
        }

        if self.state == State::ExpectingColon {
            if self.opts.omit_empty_values {
                self.remove_current_key();
            } else {
                self.output.extend_from_slice(b":\"\"");
                self.log(RepairEvent::EmptyValueAdded);
            }
            self.state = State::ExpectingCommaOrEnd;
        } else if self.state == State::InObjectValue {
            if self.output_trimmed_ends_with(b':') {
                self.rtrim_output_ws();
                if self.opts.omit_empty_values {
                    self.remove_current_key();
                } else {
                    self.output.extend_from_slice(b"\"\"");
                    self.log(RepairEvent::EmptyValueAdded);
                }
            }
            self.state = State::ExpectingCommaOrEnd;
        }

        while let Some(&closer) = self.stack.last() {
            self.strip_trailing_comma();
            if closer == b'}' && self.output_trimmed_ends_with(b':') {
                self.rtrim_output_ws();
                if self.opts.omit_empty_values {
                    self.remove_current_key();
                } else {
                    self.output.extend_from_slice(b"\"\"");
                    self.log(RepairEvent::EmptyValueAdded);
                }
            }
            self.output.push(closer);
            self.stack.pop();
            self.log(RepairEvent::CloserAdded);
        }

        let mut result = String::from_utf8(self.output).expect("engine output is valid UTF-8");

        if !self.opts.ensure_ascii && !result.is_empty() {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&result) {
                if let Ok(reencoded) = serde_json::to_string(&value) {
                    result = reencoded;
                }
            }
        }

        if !result.is_empty() {
            if let Err(source) = serde_json::from_str::<serde_json::Value>(&result) {
                return Err(RepairError::RepairFailed {
                    output: result,
                    source,
                });
            }
        }

        Ok(result)
    }
}
