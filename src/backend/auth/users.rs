/**
 * User Model and Database Operations
 *
 * The identity store: user rows, lookups by id/email/phone, and the
 * verification-flag mutation. Emails and phones are unique; uniqueness is
 * enforced by the schema and surfaced as `ChatError::AlreadyRegistered`.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::error::ChatError;
use crate::shared::UserId;

const USER_COLUMNS: &str =
    "id, email, phone, password_hash, name, is_verified, otp, otp_expires_at, created_at";

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Lowercased email address (unique)
    pub email: String,
    /// Phone number as registered (unique)
    pub phone: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Whether the email address has been confirmed
    pub is_verified: bool,
    /// Pending one-time code, cleared on verification
    #[serde(skip_serializing)]
    pub otp: Option<String>,
    /// Expiry of the pending code
    #[serde(skip_serializing)]
    pub otp_expires_at: Option<DateTime<Utc>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a new, unverified user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub name: String,
    pub otp: String,
    pub otp_expires_at: DateTime<Utc>,
}

/// Display name derived from an email address: its local part
pub fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Create a new user
///
/// # Errors
/// `AlreadyRegistered` when the email or phone is taken (including a
/// concurrent signup that won the race), `Unavailable` on store failure.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, ChatError> {
    let now = Utc::now();

    let query = format!(
        r#"
        INSERT INTO users (email, phone, password_hash, name, is_verified, otp, otp_expires_at, created_at)
        VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6, ?7)
        RETURNING {USER_COLUMNS}
        "#
    );

    // Committed explicitly so a failed commit is not reported as a new user
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<_, User>(&query)
        .bind(&new_user.email)
        .bind(&new_user.phone)
        .bind(&new_user.password_hash)
        .bind(&new_user.name)
        .bind(&new_user.otp)
        .bind(new_user.otp_expires_at)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation)?;
    tx.commit().await?;

    Ok(user)
}

fn map_unique_violation(err: sqlx::Error) -> ChatError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            let message = if db_err.message().contains("users.phone") {
                "Phone already registered"
            } else {
                "Email already registered"
            };
            return ChatError::AlreadyRegistered(message.to_string());
        }
    }
    ChatError::Unavailable(err)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1");
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?1");
    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by phone (exact match)
pub async fn get_user_by_phone(pool: &SqlitePool, phone: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE phone = ?1");
    sqlx::query_as::<_, User>(&query)
        .bind(phone)
        .fetch_optional(pool)
        .await
}

/// Find the first verified user whose phone ends with `suffix`
///
/// `suffix` must be digits only (see `normalize_phone`); an empty suffix
/// would match every user and is rejected by the caller.
pub async fn find_verified_by_phone_suffix(
    pool: &SqlitePool,
    suffix: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!(
        "SELECT {USER_COLUMNS} FROM users
         WHERE is_verified = 1 AND phone LIKE '%' || ?1
         ORDER BY id
         LIMIT 1"
    );
    sqlx::query_as::<_, User>(&query)
        .bind(suffix)
        .fetch_optional(pool)
        .await
}

/// Mark a user verified and clear the pending code
///
/// Guarded on the current flag so only the first verification flips it.
pub async fn mark_verified(pool: &SqlitePool, id: UserId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET is_verified = 1, otp = NULL
        WHERE id = ?1 AND is_verified = 0
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
