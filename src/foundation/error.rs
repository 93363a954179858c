/// Convenience result type used across cinetrack.
pub type CineResult<T> = Result<T, CineError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Fallback conditions (unknown styles, out-of-range cuts, ...) are never errors; they surface as
/// [`crate::Diagnostic`] entries on the compiled artifact instead.
#[derive(thiserror::Error, Debug)]
pub enum CineError {
    /// Invalid scene data rejected at construction time.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CineError {
    /// Build a [`CineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CineError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
