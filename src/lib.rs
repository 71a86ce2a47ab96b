//! Repairs malformed or truncated JSON-like text into strictly valid JSON.
//!
//! The primary use case is salvaging output from sources that emit
//! near-JSON text, such as LLM responses, hand-typed configuration, and logs
//! embedding JSON in prose, including text cut off mid-token when streaming
//! ended.
//!
//! The pipeline is a sanitiser (markdown fence extraction, comment
//! stripping), a single-pass tokenising engine, and a finaliser that closes
//! every still-open construct and asserts the result is strict JSON.

mod engine;
mod error;
mod logging;
mod options;
mod sanitize;

pub use error::RepairError;
pub use logging::{CollectingLogger, RepairEvent, RepairLogEntry, RepairLogger};
pub use options::Options;

use engine::Engine;

/// Repairs `input` into a strictly valid JSON string.
///
/// If `input` already parses as strict JSON, it is returned unchanged,
/// bypassing sanitisation entirely.
///
/// # Examples
///
/// ```
/// use jrepair::{repair, Options};
///
/// let broken = "{name: 'John', age: 30,}";
/// let repaired = repair(broken, &Options::default())?;
/// assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
/// # Ok::<(), jrepair::RepairError>(())
/// ```
pub fn repair(input: &str, opts: &Options) -> Result<String, RepairError> {
    if serde_json::from_str::<serde_json::Value>(input).is_ok() {
        return Ok(input.to_string());
    }
    let sanitized = sanitize::sanitize(input, opts);
    Engine::new(&sanitized, opts).run()
}

/// Repairs `input`, then decodes it with a strict JSON decoder.
///
/// On decode failure the decoder's error is surfaced unchanged, wrapped as
/// [`RepairError::Decode`].
pub fn decode(input: &str, opts: &Options) -> Result<serde_json::Value, RepairError> {
    let repaired = repair(input, opts)?;
    serde_json::from_str(&repaired).map_err(RepairError::Decode)
}

#[cfg(test)]
mod tests;
