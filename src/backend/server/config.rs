/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (after `.env` has been
 * loaded by the binary), with defaults suitable for local development:
 *
 * | Variable          | Default                        |
 * |-------------------|--------------------------------|
 * | `DATABASE_URL`    | `sqlite://onechat.db?mode=rwc` |
 * | `SERVER_PORT`     | `PORT`, then `5000`            |
 * | `JWT_SECRET`      | development placeholder        |
 * | `TOKEN_TTL_DAYS`  | `30`                           |
 * | `OTP_TTL_MINUTES` | `10`                           |
 * | `BCRYPT_COST`     | `bcrypt::DEFAULT_COST`         |
 * | `SMTP_HOST`       | `smtp.gmail.com`               |
 * | `SMTP_PORT`       | `465`                          |
 * | `MAIL_USERNAME`   | unset (mail disabled)          |
 * | `MAIL_PASSWORD`   | unset (mail disabled)          |
 */

use std::str::FromStr;

use chrono::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

const DEV_JWT_SECRET: &str = "your-super-secret-jwt-key-change-in-production";

/// How long a connection waits on a locked database before failing
const BUSY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// SMTP relay settings for OTP delivery
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// HTTP listen port
    pub port: u16,
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,
    /// Bearer token lifetime
    pub token_ttl: Duration,
    /// One-time code lifetime
    pub otp_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Mail relay; `None` disables delivery and codes are logged instead
    pub smtp: Option<SmtpConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://onechat.db?mode=rwc".to_string(),
            max_connections: 5,
            port: 5000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: Duration::days(30),
            otp_ttl: Duration::minutes(10),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            smtp: None,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        if let Some(port) = std::env::var("SERVER_PORT").ok().or_else(|| std::env::var("PORT").ok()) {
            builder = builder.port(parse_env("SERVER_PORT", &port)?);
        }

        match std::env::var("JWT_SECRET") {
            Ok(secret) => builder = builder.jwt_secret(secret),
            Err(_) => tracing::warn!("JWT_SECRET not set, using the development secret"),
        }

        if let Ok(days) = std::env::var("TOKEN_TTL_DAYS") {
            builder = builder.token_ttl(Duration::days(parse_env("TOKEN_TTL_DAYS", &days)?));
        }

        if let Ok(minutes) = std::env::var("OTP_TTL_MINUTES") {
            builder = builder.otp_ttl(Duration::minutes(parse_env("OTP_TTL_MINUTES", &minutes)?));
        }

        if let Ok(cost) = std::env::var("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_env("BCRYPT_COST", &cost)?);
        }

        match (std::env::var("MAIL_USERNAME"), std::env::var("MAIL_PASSWORD")) {
            (Ok(username), Ok(password)) => {
                let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
                let port = match std::env::var("SMTP_PORT") {
                    Ok(port) => parse_env("SMTP_PORT", &port)?,
                    Err(_) => 465,
                };
                builder = builder.smtp(SmtpConfig { host, port, username, password });
            }
            _ => tracing::warn!("MAIL_USERNAME/MAIL_PASSWORD not set. OTP email delivery is disabled."),
        }

        builder.build()
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.config.max_connections = max;
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.config.token_ttl = ttl;
        self
    }

    /// Set the one-time code lifetime
    pub fn otp_ttl(mut self, ttl: Duration) -> Self {
        self.config.otp_ttl = ttl;
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    /// Enable SMTP delivery
    pub fn smtp(mut self, smtp: SmtpConfig) -> Self {
        self.config.smtp = Some(smtp);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = self.config;

        if config.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&config.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: config.bcrypt_cost.to_string(),
            });
        }
        if config.token_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_DAYS",
                value: config.token_ttl.num_days().to_string(),
            });
        }
        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_connections",
                value: "0".to_string(),
            });
        }

        Ok(config)
    }
}

/// Open the connection pool and run migrations
///
/// The database runs in WAL mode, so open readers never block a writer's
/// commit and writers queue on the busy timeout instead of failing.
///
/// # Errors
///
/// Unlike optional services, the store is required: a connection or
/// migration failure aborts startup.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// The pool is pinned to a single connection that never expires, since
/// every SQLite `:memory:` connection is its own database.
pub async fn in_memory_database() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
