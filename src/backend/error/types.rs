/**
 * Backend Error Types
 *
 * This module defines the error taxonomy shared by the conversation engine,
 * the identity store and the HTTP handlers. Every fallible backend
 * operation returns `Result<T, ChatError>`; nothing is retried internally.
 *
 * # Error Categories
 *
 * ## Caller Errors
 *
 * - `Unauthenticated` - missing/invalid bearer token, unknown or unverified caller,
 *   bad login credentials
 * - `Forbidden` - the caller is known but may not act yet (unverified login)
 * - `InvalidArgument` - empty content, missing receiver, bad OTP
 * - `AlreadyRegistered` - signup with an email or phone that is taken
 * - `NotFound` - a user that must exist does not
 *
 * ## Server Errors
 *
 * - `Unavailable` - the store failed; propagated unchanged for the caller to retry
 * - `Internal` - hashing or token signing failed
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend error taxonomy
///
/// The `Display` text of caller errors is the client-facing message.
///
/// # Usage
///
/// ```rust
/// use onechat::backend::error::ChatError;
/// use axum::http::StatusCode;
///
/// let err = ChatError::invalid("Invalid OTP");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.message(), "Invalid OTP");
/// ```
#[derive(Debug, Error)]
pub enum ChatError {
    /// Caller identity could not be established
    #[error("{0}")]
    Unauthenticated(String),

    /// Caller is known but not allowed to proceed
    #[error("{0}")]
    Forbidden(String),

    /// Request data failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// Email or phone already belongs to a user
    #[error("{0}")]
    AlreadyRegistered(String),

    /// A referenced record is absent where it is required
    #[error("{0}")]
    NotFound(String),

    /// Store access failed
    #[error("Store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// Unexpected failure outside the store
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatError {
    /// Unauthenticated with the default message
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated("Unauthenticated".to_string())
    }

    /// Create an invalid-argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidArgument`, `AlreadyRegistered` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Unavailable` - 503 Service Unavailable
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::AlreadyRegistered(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    ///
    /// Server errors are reported generically; their details only go to the log.
    pub fn message(&self) -> String {
        match self {
            Self::Unavailable(_) => "Service temporarily unavailable".to_string(),
            Self::Internal(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<SharedError> for ChatError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::InvalidArgument(message),
            SharedError::SerializationError { message } => Self::InvalidArgument(message),
        }
    }
}
