//! The optional logging collaborator: a sink invoked synchronously at each
//! repair decision with an owned, short-lived context snippet. It must
//! never be captured past the call.

use std::fmt;

/// One kind of repair decision the engine can make. Carries just enough
/// detail for a caller to understand what happened without re-deriving it
/// from the snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairEvent {
    /// A `//` or `/* ... */` comment was stripped by the sanitiser.
    CommentRemoved,
    /// `True`/`False`/`None` (or similar) was normalised to a JSON keyword.
    KeywordNormalized,
    /// A single-quoted (or smart-quoted) string was converted to `"..."`.
    QuoteConverted,
    /// A `,` was inserted between two elements or members.
    CommaInserted,
    /// A `:` was inserted between a key and its value.
    ColonInserted,
    /// `""` was substituted for a value that was missing entirely.
    EmptyValueAdded,
    /// An unterminated string was closed at a structural byte.
    UnclosedStringClosed,
    /// A key was deleted outright under one of the `omit_*` options.
    KeyDeleted,
    /// A missing `}` or `]` was supplied by the finaliser.
    CloserAdded,
}

impl fmt::Display for RepairEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RepairEvent::CommentRemoved => "comment removed",
            RepairEvent::KeywordNormalized => "keyword normalized",
            RepairEvent::QuoteConverted => "quote converted",
            RepairEvent::CommaInserted => "comma inserted",
            RepairEvent::ColonInserted => "colon inserted",
            RepairEvent::EmptyValueAdded => "empty value added",
            RepairEvent::UnclosedStringClosed => "unclosed string closed",
            RepairEvent::KeyDeleted => "key deleted",
            RepairEvent::CloserAdded => "closer added",
        };
        f.write_str(s)
    }
}

/// An opaque collaborator receiving `(event, position, context_snippet)`
/// tuples. Implementors must not retain the `context` slice past the call.
pub trait RepairLogger {
    fn log(&mut self, event: RepairEvent, position: usize, context: &str);
}

/// A fully materialised log record, as produced by [`CollectingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub event: RepairEvent,
    pub position: usize,
    pub context: String,
}

/// A [`RepairLogger`] that simply collects every entry, for callers who want
/// the full list back rather than reacting to events as they happen.
#[derive(Debug, Default, Clone)]
pub struct CollectingLogger {
    pub entries: Vec<RepairLogEntry>,
}

impl RepairLogger for CollectingLogger {
    fn log(&mut self, event: RepairEvent, position: usize, context: &str) {
        self.entries.push(RepairLogEntry {
            event,
            position,
            context: context.to_string(),
        });
    }
}

/// Build a `>>>`-marked context snippet: a window of `radius` bytes on
/// either side of `pos`, with a marker inserted at `pos`.
pub(crate) fn context_snippet(input: &str, pos: usize, radius: usize) -> String {
    let start = pos.saturating_sub(radius);
    let start = floor_char_boundary(input, start);
    let end = floor_char_boundary(input, (pos + radius).min(input.len()));
    let pos = floor_char_boundary(input, pos.min(input.len()));
    let mut s = String::with_capacity(end - start + 5);
    s.push_str(&input[start..pos]);
    s.push_str(">>>");
    s.push_str(&input[pos..end]);
    s
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
