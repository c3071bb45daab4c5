//! Contacts HTTP Handlers

use axum::{extract::State, Json};

use crate::backend::contacts::lookup::match_phones;
use crate::backend::error::ChatError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{CheckContactsRequest, CheckContactsResponse};

/// `POST /contacts/check`
///
/// Any valid bearer token may check contacts.
pub async fn check_contacts(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    Json(request): Json<CheckContactsRequest>,
) -> Result<Json<CheckContactsResponse>, ChatError> {
    let contacts = match_phones(&state.db_pool, &request.phones).await?;
    tracing::debug!("User {} matched {} of {} phones", me, contacts.len(), request.phones.len());

    Ok(Json(CheckContactsResponse { success: true, contacts }))
}
