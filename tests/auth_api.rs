//! Authentication API integration tests
//!
//! Drives signup, OTP verification, login and `/auth/me` through the full
//! router against an in-memory database.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_full_registration_flow() {
    let app = TestApp::new().await;

    let login = register_via_api(&app, "Ann@Example.com ", "5550001", "hunter22").await;
    assert_eq!(login["success"], json!(true));
    assert_eq!(login["name"], json!("ann"));
    assert_eq!(login["phone"], json!("5550001"));
    let token = login["token"].as_str().expect("token").to_string();
    assert_contains!(token, ".");

    let me = assert_success(app.get("/auth/me", Some(&token)).await);
    assert_eq!(me["email"], json!("ann@example.com"));
    assert_eq!(me["user_id"], login["user_id"]);
}

#[tokio::test]
async fn test_signup_reports_otp_sent() {
    let app = TestApp::new().await;

    let body = assert_success(
        app.post(
            "/auth/signup",
            None,
            json!({ "email": "bob@example.com", "phone": "5550002", "password": "pw" }),
        )
        .await,
    );
    assert_eq!(body["message"], json!("OTP sent to your email"));

    let otp = pending_otp(&app, "bob@example.com").await;
    assert_eq!(otp.len(), 6);
    assert!(otp.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_signup_requires_all_fields() {
    let app = TestApp::new().await;

    let response = app
        .post("/auth/signup", None, json!({ "email": "a@example.com", "password": "pw" }))
        .await;
    assert_failure(&response, StatusCode::BAD_REQUEST, "All fields required");
}

#[tokio::test]
async fn test_signup_rejects_taken_email_and_phone() {
    let app = TestApp::new().await;
    verified_user(&app, "carol", "5550003").await;

    let response = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": "CAROL@example.com", "phone": "5559999", "password": "pw" }),
        )
        .await;
    assert_failure(&response, StatusCode::BAD_REQUEST, "Email already registered");

    let response = app
        .post(
            "/auth/signup",
            None,
            json!({ "email": "other@example.com", "phone": "5550003", "password": "pw" }),
        )
        .await;
    assert_failure(&response, StatusCode::BAD_REQUEST, "Phone already registered");
}

#[tokio::test]
async fn test_verify_otp_errors() {
    let app = TestApp::new().await;
    create_test_user(&app, "dave", "5550004", false).await;

    let response = app
        .post("/auth/verify-otp", None, json!({ "email": "nobody@example.com", "otp": "123456" }))
        .await;
    assert_failure(&response, StatusCode::NOT_FOUND, "User not found");

    let response = app
        .post("/auth/verify-otp", None, json!({ "email": "dave@example.com", "otp": "000000" }))
        .await;
    assert_failure(&response, StatusCode::BAD_REQUEST, "Invalid OTP");

    let body = assert_success(
        app.post("/auth/verify-otp", None, json!({ "email": "dave@example.com", "otp": "123456" }))
            .await,
    );
    assert_eq!(body["message"], json!("Email verified successfully"));

    let body = assert_success(
        app.post("/auth/verify-otp", None, json!({ "email": "dave@example.com", "otp": "999999" }))
            .await,
    );
    assert_eq!(body["message"], json!("Already verified"));
}

#[tokio::test]
async fn test_login_failures() {
    let app = TestApp::new().await;
    let erin = verified_user(&app, "erin", "5550005").await;
    let frank = create_test_user(&app, "frank", "5550006", false).await;

    let response = app
        .post("/auth/login", None, json!({ "email": erin.email, "password": "wrong" }))
        .await;
    assert_failure(&response, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let response = app
        .post("/auth/login", None, json!({ "email": "ghost@example.com", "password": "x" }))
        .await;
    assert_failure(&response, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let response = app
        .post("/auth/login", None, json!({ "email": frank.email, "password": frank.password }))
        .await;
    assert_failure(&response, StatusCode::FORBIDDEN, "Please verify your email first");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.get("/auth/me", None).await;
    assert_failure(&response, StatusCode::UNAUTHORIZED, "Unauthenticated");

    let response = app.get("/auth/me", Some("not-a-jwt")).await;
    assert_failure(&response, StatusCode::UNAUTHORIZED, "Unauthenticated");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "app": "OneChat" }));

    let response = app.get("/nowhere", None).await;
    assert_failure(&response, StatusCode::NOT_FOUND, "Not found");
}
