//! Backend Module
//!
//! This module contains all server-side code for OneChat: an Axum HTTP
//! server with OTP-verified signup, bearer-token sessions and direct
//! messaging over SQLite.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup, OTP verification, login, JWT sessions, users
//! - **`chat`** - Conversation engine and direct-message handlers
//! - **`contacts`** - Phone-number contact discovery
//! - **`groups`** - Group creation
//! - **`notify`** - OTP email delivery
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Backend error taxonomy and HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── chat/           - Conversation engine and handlers
//! ├── contacts/       - Contact discovery
//! ├── groups/         - Groups
//! ├── notify/         - Mail delivery
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ChatError>`; `ChatError` converts into a
//! status code plus `{"success": false, "message": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Direct messaging
pub mod chat;

/// Contact discovery
pub mod contacts;

/// Groups
pub mod groups;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// OTP delivery
pub mod notify;

/// Middleware for request processing
pub mod middleware;

pub use chat::ConversationEngine;
pub use error::ChatError;
pub use server::{create_app, create_app_with_pool, AppState, ServerConfig};
