/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across signup, verify-otp, login, and me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// Sign up request
///
/// Missing fields deserialize as empty so the handler can report them with
/// a single "All fields required" message.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Email address (trimmed and lowercased before use)
    #[serde(default)]
    pub email: String,
    /// Phone number (trimmed before use)
    #[serde(default)]
    pub phone: String,
    /// Plain password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// OTP verification request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub otp: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Plain acknowledgement with a human-readable message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login response
///
/// Contains the bearer token and the profile fields the client caches.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub success: bool,
    /// JWT token for authentication
    pub token: String,
    pub user_id: UserId,
    pub name: String,
    pub phone: String,
}

/// Current user response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MeResponse {
    pub success: bool,
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_missing_fields_default_to_empty() {
        let request: SignupRequest = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(request.email, "a@b.c");
        assert!(request.phone.is_empty());
        assert!(request.password.is_empty());
    }

    #[test]
    fn test_message_response_ok() {
        let json = serde_json::to_value(MessageResponse::ok("Already verified")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "Already verified"}));
    }
}
