/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - Protected routes sit behind `auth_middleware` via `route_layer`, so
 *   unknown paths still fall through to the JSON 404 instead of a 401.
 * - `TraceLayer` wraps everything and logs each request.
 */

use axum::{http::StatusCode, middleware::from_fn_with_state, Json, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::conversion::FailureBody;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::{protected_api_routes, public_api_routes};
use crate::backend::routes::chat_routes::chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool, engine and services
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .merge(protected_api_routes())
        .merge(chat_routes())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    Router::new()
        .merge(public_api_routes())
        .merge(protected)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, Json<FailureBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(FailureBody {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}
