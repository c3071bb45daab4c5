//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use onechat::backend::auth::SessionKeys;
//! use onechat::backend::middleware::{auth_middleware, AuthUser};
//!
//! # fn example(keys: SessionKeys) -> Router {
//! Router::new()
//!     .route("/whoami", get(|AuthUser(id): AuthUser| async move { id.to_string() }))
//!     .route_layer(from_fn_with_state(keys, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
