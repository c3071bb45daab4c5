//! Database operations for direct messages
//!
//! Raw message-store access for the conversation engine. Message times are
//! stored as integer microseconds; every insert is stamped with the later
//! of the wall clock and one microsecond past the newest stored message, so
//! timestamps never go backwards within a store.
//!
//! Functions that the engine runs inside a transaction take any SQLite
//! executor, so they accept both `&SqlitePool` and `&mut *tx`.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::shared::{ChatMessage, MessageId, UserId};

const MESSAGE_COLUMNS: &str = "id, sender_id, receiver_id, content, sent_at, is_read";

/// Message row as stored
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    /// Microseconds since the Unix epoch
    pub sent_at: i64,
    pub is_read: bool,
}

impl MessageRecord {
    /// Convert to the wire representation
    pub fn into_message(self) -> ChatMessage {
        ChatMessage {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            content: self.content,
            timestamp: from_micros(self.sent_at),
            is_read: self.is_read,
        }
    }
}

/// One chat-list row produced by `conversation_rows`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConversationRow {
    pub user_id: UserId,
    pub name: String,
    pub phone: Option<String>,
    pub last_message: Option<String>,
    pub last_sent_at: Option<i64>,
    pub unread_count: i64,
}

/// Convert stored microseconds to a UTC timestamp
pub fn from_micros(micros: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(micros).unwrap_or_default()
}

/// Convert a UTC timestamp to stored microseconds
pub fn to_micros(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp_micros()
}

/// Append a message with read and deleted flags cleared
///
/// The insert is committed explicitly before the row is returned, so a
/// failed commit surfaces as an error rather than a message that was never
/// stored.
pub async fn insert_message(
    pool: &SqlitePool,
    sender_id: UserId,
    receiver_id: UserId,
    content: &str,
    now: DateTime<Utc>,
) -> Result<MessageRecord, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO messages (sender_id, receiver_id, content, sent_at, is_read, is_deleted)
        VALUES (?1, ?2, ?3, MAX(?4, COALESCE((SELECT MAX(sent_at) + 1 FROM messages), 0)), 0, 0)
        RETURNING {MESSAGE_COLUMNS}
        "#
    );

    let mut tx = pool.begin().await?;
    let record = sqlx::query_as::<_, MessageRecord>(&query)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(content)
        .bind(to_micros(now))
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(record)
}

/// Non-deleted messages between two users, oldest first
pub async fn fetch_thread<'e, E>(executor: E, a: UserId, b: UserId) -> Result<Vec<MessageRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, MessageRecord>(
        r#"
        SELECT id, sender_id, receiver_id, content, sent_at, is_read
        FROM messages
        WHERE is_deleted = 0
          AND ((sender_id = ?1 AND receiver_id = ?2) OR (sender_id = ?2 AND receiver_id = ?1))
        ORDER BY sent_at ASC, id ASC
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_all(executor)
    .await
}

/// Mark every unread message from `sender_id` to `reader_id` as read
///
/// Returns the number of messages flipped.
pub async fn mark_thread_read<'e, E>(executor: E, reader_id: UserId, sender_id: UserId) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET is_read = 1
        WHERE sender_id = ?1 AND receiver_id = ?2 AND is_read = 0
        "#,
    )
    .bind(sender_id)
    .bind(reader_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Soft-delete every message between two users, in both directions
pub async fn clear_thread(pool: &SqlitePool, a: UserId, b: UserId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET is_deleted = 1
        WHERE (sender_id = ?1 AND receiver_id = ?2) OR (sender_id = ?2 AND receiver_id = ?1)
        "#,
    )
    .bind(a)
    .bind(b)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// One row per counterpart of `user_id`, newest conversation first
///
/// A single window-function pass picks the latest visible message per
/// counterpart and sums that counterpart's unread messages to the user.
/// Counterparts without a user record are dropped by the join.
pub async fn conversation_rows(pool: &SqlitePool, user_id: UserId) -> Result<Vec<ConversationRow>, sqlx::Error> {
    sqlx::query_as::<_, ConversationRow>(
        r#"
        WITH visible AS (
            SELECT id, sender_id, receiver_id, content, sent_at, is_read,
                   CASE WHEN sender_id = ?1 THEN receiver_id ELSE sender_id END AS counterpart_id
            FROM messages
            WHERE is_deleted = 0 AND (sender_id = ?1 OR receiver_id = ?1)
        ),
        ranked AS (
            SELECT counterpart_id, content, sent_at,
                   ROW_NUMBER() OVER (
                       PARTITION BY counterpart_id ORDER BY sent_at DESC, id DESC
                   ) AS rn,
                   SUM(CASE WHEN sender_id = counterpart_id AND receiver_id = ?1 AND is_read = 0
                            THEN 1 ELSE 0 END)
                       OVER (PARTITION BY counterpart_id) AS unread_count
            FROM visible
        )
        SELECT u.id AS user_id, u.name AS name, u.phone AS phone,
               r.content AS last_message, r.sent_at AS last_sent_at, r.unread_count AS unread_count
        FROM ranked r
        JOIN users u ON u.id = r.counterpart_id
        WHERE r.rn = 1
        ORDER BY r.sent_at DESC, u.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
