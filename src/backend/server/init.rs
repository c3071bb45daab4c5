/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and apply migrations
 * 2. Build the mailer and session keys
 * 3. Create and configure the router
 *
 * Unlike the mailer, which degrades to logging when unconfigured, the store
 * is required: a database failure aborts startup.
 */

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::notify::MailError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum BootError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("mailer error: {0}")]
    Mail(#[from] MailError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `BootError::Database` when the pool cannot be opened or the
/// migrations fail, and `BootError::Mail` when SMTP settings are invalid.
pub async fn create_app(config: ServerConfig) -> Result<Router, BootError> {
    tracing::info!("Initializing OneChat backend server");

    let pool = load_database(&config).await?;
    create_app_with_pool(config, pool)
}

/// Create the application over an already-open pool
///
/// Integration tests use this with an in-memory database.
pub fn create_app_with_pool(config: ServerConfig, pool: SqlitePool) -> Result<Router, BootError> {
    let app_state = AppState::new(config, pool)?;

    if !app_state.mailer.is_enabled() {
        tracing::warn!("Mailer disabled: OTP codes will be logged");
    }

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
