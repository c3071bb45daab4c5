//! Custom assertion macros and utilities
//!
//! Provides assertions for the `{"success": false, "message": ...}` failure
//! shape shared by every endpoint.

use axum::http::StatusCode;
use serde_json::Value;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a failed response with the given status and message
pub fn assert_failure(response: &(StatusCode, Value), status: StatusCode, message: &str) {
    let (actual_status, body) = response;
    assert_eq!(*actual_status, status, "unexpected status, body: {body}");
    assert_eq!(body["success"], Value::Bool(false), "body: {body}");
    assert_eq!(body["message"], Value::String(message.to_string()), "body: {body}");
}

/// Assert a successful response and return its body
pub fn assert_success(response: (StatusCode, Value)) -> Value {
    let (status, body) = response;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["success"], Value::Bool(true), "body: {body}");
    body
}
