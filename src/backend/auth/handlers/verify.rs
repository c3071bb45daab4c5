/**
 * OTP Verification Handler
 *
 * POST /auth/verify-otp confirms control of the email address by checking
 * the code mailed at signup.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::backend::auth::handlers::types::{MessageResponse, VerifyOtpRequest};
use crate::backend::auth::otp::{check_otp, OtpStatus};
use crate::backend::auth::users::{get_user_by_email, mark_verified};
use crate::backend::error::ChatError;
use crate::backend::server::state::AppState;

/// Verify OTP handler
///
/// # Errors
///
/// * `404 Not Found` - no user has this email
/// * `400 Bad Request` - the code is wrong or expired
/// * `503 Service Unavailable` - the store failed
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, ChatError> {
    let email = request.email.trim().to_lowercase();
    let user = get_user_by_email(&state.db_pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("OTP verification for unknown email: {}", email);
            ChatError::not_found("User not found")
        })?;

    match check_otp(&user, request.otp.trim(), Utc::now()) {
        Ok(OtpStatus::AlreadyVerified) => Ok(Json(MessageResponse::ok("Already verified"))),
        Ok(OtpStatus::Accepted) => {
            mark_verified(&state.db_pool, user.id).await?;
            tracing::info!("User verified: {} ({})", user.id, user.email);
            Ok(Json(MessageResponse::ok("Email verified successfully")))
        }
        Err(e) => {
            tracing::warn!("OTP rejected for {}: {}", user.email, e);
            Err(e)
        }
    }
}
