//! Shared Error Types
//!
//! Errors raised while interpreting request payloads, before anything
//! touches the store.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a content rule (empty, missing)
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use onechat::shared::error::SharedError;
//!
//! let error = SharedError::validation("content", "receiver_id and content required");
//! assert_eq!(error.field(), Some("content"));
//! ```
use thiserror::Error;

/// Errors shared between request parsing and the backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Serialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Error message
        message: String,
    },

    /// Validation error
    ///
    /// The `message` is client-facing and is returned verbatim in the
    /// failure body.
    #[error("{message}")]
    ValidationError {
        /// Field that failed validation
        field: String,
        /// Error message
        message: String,
    },
}

impl SharedError {
    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field name for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("name", "Group name required");
        match &error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "name");
                assert_eq!(message, "Group name required");
            }
            _ => panic!("Expected ValidationError"),
        }
        assert_eq!(error.to_string(), "Group name required");
    }

    #[test]
    fn test_serialization_error_has_no_field() {
        let error = SharedError::serialization("bad");
        assert_eq!(error.field(), None);
        assert!(error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::SerializationError { .. }));
    }
}
