/// Convenience result type used across carrows.
pub type ArrowResult<T> = Result<T, ArrowError>;

/// Errors raised where configuration or requests enter the library.
///
/// The geometry itself never fails; these only surface from option builders,
/// JSON loading and [`crate::ArrowRequest`] validation.
#[derive(thiserror::Error, Debug)]
pub enum ArrowError {
    /// Invalid user-provided options or endpoint data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options and requests.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ArrowError {
    /// Build a [`ArrowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ArrowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ArrowError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
