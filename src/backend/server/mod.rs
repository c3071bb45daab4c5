//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and validation, database pool
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (env, database, SMTP)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use onechat::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, SmtpConfig};
pub use init::{create_app, create_app_with_pool, BootError};
pub use state::AppState;
