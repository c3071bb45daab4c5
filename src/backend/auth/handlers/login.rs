/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Require a verified email
 * 4. Generate JWT token
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message
 * - Unverified users get 403 only after the password has matched
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ChatError;
use crate::backend::server::state::AppState;

fn invalid_credentials() -> ChatError {
    ChatError::Unauthenticated("Invalid credentials".to_string())
}

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - user not found or password incorrect
/// * `403 Forbidden` - email not verified yet
/// * `503 Service Unavailable` - the store failed
/// * `500 Internal Server Error` - password verification or token signing failed
///
/// # Example Response
///
/// ```json
/// {
///   "success": true,
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user_id": 1,
///   "name": "alice",
///   "phone": "+15550001111"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ChatError> {
    let email = request.email.trim().to_lowercase();
    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&state.db_pool, &email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        invalid_credentials()
    })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ChatError::internal("password verification failed")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(invalid_credentials());
    }

    if !user.is_verified {
        tracing::warn!("Login before verification: {}", email);
        return Err(ChatError::Forbidden("Please verify your email first".to_string()));
    }

    let token = state.sessions.create_token(user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ChatError::internal("token signing failed")
    })?;

    tracing::info!("User logged in: {} ({})", user.id, user.email);

    Ok(Json(LoginResponse {
        success: true,
        token,
        user_id: user.id,
        name: user.name,
        phone: user.phone,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::{create_user, mark_verified, NewUser};
    use crate::backend::server::state::test_state;
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    async fn seed(state: &AppState, verified: bool) -> i64 {
        let user = create_user(
            &state.db_pool,
            NewUser {
                email: "alice@example.com".into(),
                phone: "5550001111".into(),
                password_hash: bcrypt::hash("password123", 4).unwrap(),
                name: "alice".into(),
                otp: "123456".into(),
                otp_expires_at: Utc::now() + Duration::minutes(10),
            },
        )
        .await
        .unwrap();
        if verified {
            mark_verified(&state.db_pool, user.id).await.unwrap();
        }
        user.id
    }

    fn request(email: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            email: email.into(),
            password: password.into(),
        })
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state().await;
        let id = seed(&state, true).await;

        let response = login(State(state.clone()), request("alice@example.com", "password123")).await.unwrap();
        assert!(response.success);
        assert_eq!(response.user_id, id);
        assert_eq!(response.name, "alice");
        assert_eq!(response.phone, "5550001111");
        assert_eq!(state.sessions.user_id_from_token(&response.token).unwrap(), id);
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = test_state().await;
        seed(&state, true).await;

        let result = login(State(state), request("alice@example.com", "wrongpassword")).await;
        assert_matches!(result, Err(ChatError::Unauthenticated(m)) if m == "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let state = test_state().await;
        let result = login(State(state), request("nonexistent@example.com", "password123")).await;
        assert_matches!(result, Err(ChatError::Unauthenticated(m)) if m == "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unverified() {
        let state = test_state().await;
        seed(&state, false).await;

        let result = login(State(state), request("alice@example.com", "password123")).await;
        assert_matches!(result, Err(ChatError::Forbidden(m)) if m == "Please verify your email first");
    }
}
