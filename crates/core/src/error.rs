//! Error types for value coercion
//!
//! Coercion has exactly one failure kind, [`Error::InvalidValue`], which
//! carries the dynamic type name of the rejected input for diagnostics.
//! The remaining variants belong to the JSON boundary.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for coercion and codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for generic values
#[derive(Debug, Error)]
pub enum Error {
    /// Input shape cannot be coerced into the target type
    ///
    /// `type_name` is the name reported by [`Value::type_name`](crate::Value::type_name),
    /// `nil` for a null input.
    #[error("invalid value: ({type_name})")]
    InvalidValue {
        /// Dynamic type name of the rejected input
        type_name: &'static str,
    },

    /// Malformed JSON text
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload has no representation in the target encoding
    #[error("encode error: {reason}")]
    Encode {
        /// Why the payload cannot be encoded
        reason: String,
    },
}

impl Error {
    /// Create an invalid-value error for a rejected input type
    pub fn invalid(type_name: &'static str) -> Self {
        Error::InvalidValue { type_name }
    }

    /// Create an encode error
    pub fn encode(reason: impl Into<String>) -> Self {
        Error::Encode {
            reason: reason.into(),
        }
    }

    /// Check if this is a coercion failure
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Error::InvalidValue { .. })
    }
}
