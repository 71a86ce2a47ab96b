use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::logging::RepairLogger;

/// Explicit configuration for [`crate::repair`] and [`crate::decode`].
///
/// Kept as a plain record rather than implicit global toggles: every knob
/// the engine consults is a field here.
#[derive(Clone)]
pub struct Options {
    /// Escape non-ASCII characters as `\uXXXX` in the output. Default `true`.
    ///
    /// The engine always builds its canonical output with non-ASCII bytes
    /// escaped; when this is `false` the finaliser's post-pass decodes and
    /// re-encodes the result with literal Unicode instead.
    pub ensure_ascii: bool,
    /// Delete a key outright, instead of substituting `""`, whenever its
    /// value was missing (lost colon, lost value, or a truncated keyword).
    pub omit_empty_values: bool,
    /// Delete a key outright, instead of closing it, whenever its string
    /// value ran off the end of the input unterminated.
    pub omit_incomplete_strings: bool,
    /// Number of bytes of context captured on either side of a log
    /// position. Default `15`.
    pub log_context_window: usize,
    /// Optional sink receiving a record for every repair decision the engine
    /// makes. Invoked synchronously; never retains the engine.
    pub logger: Option<Rc<RefCell<dyn RepairLogger>>>,
}

impl Options {
    /// Attach a logging collaborator, replacing any previous one.
    pub fn with_logger(mut self, logger: impl RepairLogger + 'static) -> Self {
        self.logger = Some(Rc::new(RefCell::new(logger)));
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ensure_ascii: true,
            omit_empty_values: false,
            omit_incomplete_strings: false,
            log_context_window: 15,
            logger: None,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("ensure_ascii", &self.ensure_ascii)
            .field("omit_empty_values", &self.omit_empty_values)
            .field("omit_incomplete_strings", &self.omit_incomplete_strings)
            .field("log_context_window", &self.log_context_window)
            .field("logger", &self.logger.as_ref().map(|_| "<logger>"))
            .finish()
    }
}
