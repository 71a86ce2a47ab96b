use thiserror::Error;

/// Errors produced by [`crate::repair`] and [`crate::decode`].
///
/// The repair engine itself never fails mid-stream (every unexpected byte is
/// skipped, inserted, or promoted into a repair); the only failure mode is the
/// finaliser's closing strict-JSON assertion, plus whatever the strict
/// decoder surfaces for [`crate::decode`].
#[derive(Debug, Error)]
pub enum RepairError {
    /// The finaliser produced non-empty output that does not parse as strict
    /// JSON. This signals a defect in the engine or an extreme pathological
    /// input; the output is attached for diagnosis.
    #[error("repair produced invalid JSON: {source}")]
    RepairFailed {
        output: String,
        #[source]
        source: serde_json::Error,
    },

    /// `decode` repaired the input successfully but the strict decoder could
    /// not parse the repaired text.
    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl RepairError {
    /// The JSON text produced by the engine, when available, for diagnosis.
    pub fn output(&self) -> Option<&str> {
        match self {
            RepairError::RepairFailed { output, .. } => Some(output),
            RepairError::Decode(_) => None,
        }
    }
}
