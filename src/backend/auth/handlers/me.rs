/**
 * Get Current User Handler
 *
 * GET /auth/me returns the profile of the authenticated caller. The bearer
 * token has already been verified by the auth middleware.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::MeResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ChatError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - the token's user no longer exists
/// * `503 Service Unavailable` - the store failed
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MeResponse>, ChatError> {
    let user = get_user_by_id(&state.db_pool, user_id).await?.ok_or_else(|| {
        tracing::warn!("Token references missing user: {}", user_id);
        ChatError::unauthenticated()
    })?;

    Ok(Json(MeResponse {
        success: true,
        user_id: user.id,
        email: user.email,
        name: user.name,
        phone: user.phone,
    }))
}
