//! OneChat - Main Library
//!
//! OneChat is a small chat backend: users sign up with email and phone,
//! confirm their email with a one-time code, log in for a bearer token and
//! exchange direct messages.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - Message, chat-list, contact and group bodies
//!   - Validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routes
//!   - Conversation engine over SQLite
//!   - Authentication, OTP mail delivery
//!
//! # Usage
//!
//! ```rust,no_run
//! use onechat::backend::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
