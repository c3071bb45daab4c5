//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, auth layer, fallback
//! ├── chat_routes.rs  - Chat, contact and group routes
//! └── api_routes.rs   - Auth and health routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /auth/signup`, `POST /auth/verify-otp`, `POST /auth/login`
//! - `GET /health`
//!
//! ## Bearer token required
//!
//! - `GET /auth/me`
//! - `GET /chat/list`, `GET /chat/messages/{id}`, `POST /chat/send`
//! - `DELETE /chat/clear/{id}`, `DELETE /chat/delete/{id}`
//! - `POST /contacts/check`, `POST /group/create`
//!
//! Unknown paths get a JSON 404 in the standard failure shape.

/// Main router creation
pub mod router;

/// Chat-related routes
pub mod chat_routes;

/// Auth and service routes
pub mod api_routes;

pub use router::create_router;
