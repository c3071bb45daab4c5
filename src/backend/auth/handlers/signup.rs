/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Normalize and require email, phone and password
 * 2. Check that neither email nor phone is registered
 * 3. Hash password using bcrypt
 * 4. Create an unverified user holding a fresh one-time code
 * 5. Mail the code without waiting for delivery
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with the configured cost
 * - No token is issued until the email is verified and the user logs in
 */

use axum::{extract::State, response::Json};
use bcrypt::hash;
use chrono::Utc;

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::auth::otp::generate_otp;
use crate::backend::auth::users::{create_user, default_display_name, get_user_by_email, get_user_by_phone, NewUser};
use crate::backend::error::ChatError;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing, or the email or phone is taken
/// * `503 Service Unavailable` - the store failed
/// * `500 Internal Server Error` - password hashing failed
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "phone": "+15550001111", "password": "secret"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<MessageResponse>, ChatError> {
    let email = request.email.trim().to_lowercase();
    let phone = request.phone.trim().to_string();

    if email.is_empty() || phone.is_empty() || request.password.is_empty() {
        tracing::warn!("Signup rejected: missing fields");
        return Err(ChatError::invalid("All fields required"));
    }

    tracing::info!("Signup request for email: {}", email);

    if get_user_by_email(&state.db_pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(ChatError::AlreadyRegistered("Email already registered".to_string()));
    }

    if get_user_by_phone(&state.db_pool, &phone).await?.is_some() {
        tracing::warn!("Phone already exists: {}", phone);
        return Err(ChatError::AlreadyRegistered("Phone already registered".to_string()));
    }

    let password_hash = hash(&request.password, state.config.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ChatError::internal("password hashing failed")
    })?;

    let otp = generate_otp();
    let user = create_user(
        &state.db_pool,
        NewUser {
            name: default_display_name(&email),
            email,
            phone,
            password_hash,
            otp: otp.clone(),
            otp_expires_at: Utc::now() + state.config.otp_ttl,
        },
    )
    .await?;

    state.mailer.dispatch_otp(user.email.clone(), otp);

    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok(Json(MessageResponse::ok("OTP sent to your email")))
}
