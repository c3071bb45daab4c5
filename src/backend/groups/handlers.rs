//! Group HTTP Handlers

use axum::{extract::State, Json};

use crate::backend::error::ChatError;
use crate::backend::groups::db;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{CreateGroupRequest, CreateGroupResponse};

/// `POST /group/create`
///
/// # Errors
///
/// * `400 Bad Request` - the name is blank
/// * `401 Unauthorized` - the caller is unknown or unverified
pub async fn create_group(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    Json(request): Json<CreateGroupRequest>,
) -> Result<Json<CreateGroupResponse>, ChatError> {
    state.engine.require_caller(me).await?;
    let name = request.group_name()?;

    let group = db::create_group(&state.db_pool, me, name, &request.members).await?;
    tracing::info!("Group {} created by {} with {} members", group.id, me, request.members.len() + 1);

    Ok(Json(CreateGroupResponse {
        success: true,
        group_id: group.id,
        name: group.name,
    }))
}
