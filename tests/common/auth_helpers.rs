//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and walking the signup flow over HTTP.

use chrono::{Duration, Utc};
use serde_json::json;

use onechat::backend::auth::users::{create_user, get_user_by_email, mark_verified, NewUser};
use onechat::backend::auth::SessionKeys;
use onechat::shared::UserId;

use super::database::TestApp;

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub token: String,
}

/// Insert a user directly, optionally verified, and mint a token for it
pub async fn create_test_user(app: &TestApp, name: &str, phone: &str, verified: bool) -> TestUser {
    let email = format!("{name}@example.com");
    let password = format!("{name}-password");
    let user = create_user(
        &app.pool,
        NewUser {
            email: email.clone(),
            phone: phone.to_string(),
            password_hash: bcrypt::hash(&password, 4).expect("hash"),
            name: name.to_string(),
            otp: "123456".to_string(),
            otp_expires_at: Utc::now() + Duration::minutes(10),
        },
    )
    .await
    .expect("create user");

    if verified {
        mark_verified(&app.pool, user.id).await.expect("verify user");
    }

    TestUser {
        id: user.id,
        token: generate_test_token(app, user.id, &email),
        email,
        phone: phone.to_string(),
        password,
    }
}

/// A verified user with a valid token
pub async fn verified_user(app: &TestApp, name: &str, phone: &str) -> TestUser {
    create_test_user(app, name, phone, true).await
}

/// Generate a token signed with the app's secret
pub fn generate_test_token(app: &TestApp, user_id: UserId, email: &str) -> String {
    SessionKeys::new(&app.config.jwt_secret, app.config.token_ttl)
        .create_token(user_id, email)
        .expect("token")
}

/// Read the pending code for an email straight from the store
pub async fn pending_otp(app: &TestApp, email: &str) -> String {
    get_user_by_email(&app.pool, &email.trim().to_lowercase())
        .await
        .expect("lookup")
        .and_then(|user| user.otp)
        .expect("pending otp")
}

/// Sign up, verify and log in over HTTP, returning the login body
pub async fn register_via_api(app: &TestApp, email: &str, phone: &str, password: &str) -> serde_json::Value {
    let (status, _) = app
        .post("/auth/signup", None, json!({ "email": email, "phone": phone, "password": password }))
        .await;
    assert!(status.is_success(), "signup failed: {status}");

    let otp = pending_otp(app, email).await;
    let (status, _) = app.post("/auth/verify-otp", None, json!({ "email": email, "otp": otp })).await;
    assert!(status.is_success(), "verify failed: {status}");

    let (status, body) = app
        .post("/auth/login", None, json!({ "email": email, "password": password }))
        .await;
    assert!(status.is_success(), "login failed: {status}");
    body
}
