/**
 * API Route Handlers
 *
 * This module defines the authentication and service routes.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup` - User registration
 * - `POST /auth/verify-otp` - Email verification
 * - `POST /auth/login` - User login
 * - `GET /auth/me` - Get current user info (requires authentication)
 *
 * ## Service
 * - `GET /health` - Liveness check
 */

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::backend::auth::{get_me, login, signup, verify_otp};
use crate::backend::server::state::AppState;

/// Public routes: no bearer token required
pub fn public_api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/verify-otp", post(verify_otp))
        .route("/auth/login", post(login))
        .route("/health", get(health))
}

/// Authentication routes that need a bearer token
pub fn protected_api_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(get_me))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "app": "OneChat" }))
}
