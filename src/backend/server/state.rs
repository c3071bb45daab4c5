/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The conversation engine built over that pool
 * - Session signing keys
 * - The OTP mailer
 * - The loaded configuration
 *
 * Every field is cheap to clone; the pool and keys are reference counted.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers and middleware to
 * extract specific parts of the state without needing the entire
 * `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::chat::engine::ConversationEngine;
use crate::backend::notify::{MailError, Mailer};
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Conversation engine over `db_pool`
    pub engine: ConversationEngine,

    /// Bearer token signing and verification keys
    pub sessions: SessionKeys,

    /// OTP delivery
    pub mailer: Mailer,

    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Assemble state around an open pool
    ///
    /// # Errors
    /// Fails if the configured SMTP relay cannot be set up.
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Result<Self, MailError> {
        let mailer = Mailer::new(config.smtp.as_ref(), config.otp_ttl)?;
        let sessions = SessionKeys::new(&config.jwt_secret, config.token_ttl);

        Ok(Self {
            engine: ConversationEngine::new(db_pool.clone()),
            db_pool,
            sessions,
            mailer,
            config: Arc::new(config),
        })
    }
}

/// Implement FromRef for SqlitePool
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for ConversationEngine
impl FromRef<AppState> for ConversationEngine {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.engine.clone()
    }
}

/// Implement FromRef for SessionKeys
///
/// This lets the auth middleware take `State<SessionKeys>`.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

/// State over a fresh in-memory database, with a cheap bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::server::config::in_memory_database;

    let config = ServerConfig::builder()
        .jwt_secret("test-secret")
        .bcrypt_cost(4)
        .build()
        .unwrap();
    let pool = in_memory_database().await.unwrap();
    AppState::new(config, pool).unwrap()
}
