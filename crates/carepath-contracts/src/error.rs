//! Error types for the CAREPATH pipeline around the decision engine.
//!
//! The decision engine itself never fails. These variants cover the layers a
//! caller wraps around it: settings loading, result verification, and the
//! analysis history.

use thiserror::Error;

/// The unified error type for the CAREPATH crates.
#[derive(Debug, Error)]
pub enum CarepathError {
    /// A settings value is missing, malformed, or out of range.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The history sink could not append a record.
    ///
    /// A result that cannot be logged is not returned to the caller.
    #[error("history write failed: {reason}")]
    HistoryWriteFailed { reason: String },

    /// The verifier rejected an engine result before it was logged.
    #[error("result verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// A JSON Schema document could not be compiled or applied.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// An engine result could not be converted to its JSON form.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for CarepathError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the CAREPATH crates.
pub type CarepathResult<T> = Result<T, CarepathError>;
