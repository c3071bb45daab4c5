//! Conversation Engine
//!
//! Computes chat lists, two-party threads, unread counts and clear
//! semantics from raw message rows. Every operation first resolves the
//! caller to an existing, verified user.
//!
//! # Read state
//!
//! Opening a thread flips the counterpart's unread messages to read and then
//! fetches the thread in one transaction, so a chat list requested after
//! `get_thread` returns already reports zero unread for that counterpart.
//!
//! # Clearing
//!
//! Clearing is shared: it hides the thread for both participants.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::chat::db;
use crate::backend::error::ChatError;
use crate::shared::messaging::conversation::sort_newest_first;
use crate::shared::messaging::message::{normalize_content, require_receiver};
use crate::shared::{ChatMessage, ChatSummary, UserId};

/// Conversation engine over a message store
#[derive(Debug, Clone)]
pub struct ConversationEngine {
    pool: SqlitePool,
}

impl ConversationEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve the caller to a verified user
    ///
    /// # Errors
    /// `Unauthenticated` when the user is unknown or has not verified
    /// their email.
    pub async fn require_caller(&self, caller: UserId) -> Result<User, ChatError> {
        match get_user_by_id(&self.pool, caller).await? {
            Some(user) if user.is_verified => Ok(user),
            Some(_) => {
                tracing::warn!("Unverified caller rejected: {}", caller);
                Err(ChatError::unauthenticated())
            }
            None => {
                tracing::warn!("Unknown caller rejected: {}", caller);
                Err(ChatError::unauthenticated())
            }
        }
    }

    /// The caller's chat list, newest conversation first
    pub async fn list_conversations(&self, caller: UserId) -> Result<Vec<ChatSummary>, ChatError> {
        self.require_caller(caller).await?;

        let now = Utc::now();
        let rows = db::conversation_rows(&self.pool, caller).await?;

        let mut chats: Vec<ChatSummary> = rows
            .into_iter()
            .map(|row| {
                let last = row.last_message.zip(row.last_sent_at.map(db::from_micros));
                let unread = u32::try_from(row.unread_count).unwrap_or(u32::MAX);
                ChatSummary::new(row.user_id, row.name, row.phone, last, unread, now)
            })
            .collect();
        sort_newest_first(&mut chats);

        tracing::debug!("Listed {} conversations for user {}", chats.len(), caller);
        Ok(chats)
    }

    /// Visible messages between the caller and `counterpart`, oldest first
    ///
    /// Messages the counterpart sent to the caller are marked read as part
    /// of the same transaction and are returned with `is_read` set.
    /// The counterpart does not have to exist.
    pub async fn get_thread(&self, caller: UserId, counterpart: UserId) -> Result<Vec<ChatMessage>, ChatError> {
        self.require_caller(caller).await?;

        // Write first: the transaction must hold the write lock before it reads
        let mut tx = self.pool.begin().await?;
        let flipped = db::mark_thread_read(&mut *tx, caller, counterpart).await?;
        let records = db::fetch_thread(&mut *tx, caller, counterpart).await?;
        tx.commit().await?;

        if flipped > 0 {
            tracing::debug!("Marked {} messages from {} read for {}", flipped, counterpart, caller);
        }

        Ok(records.into_iter().map(db::MessageRecord::into_message).collect())
    }

    /// Append a message from the caller
    ///
    /// # Errors
    /// `InvalidArgument` when the receiver is missing or the content is
    /// blank. The receiver is not checked for existence.
    pub async fn send_message(
        &self,
        caller: UserId,
        receiver: Option<UserId>,
        content: &str,
    ) -> Result<ChatMessage, ChatError> {
        self.require_caller(caller).await?;

        let receiver = require_receiver(receiver)?;
        let content = normalize_content(content)?;

        let record = db::insert_message(&self.pool, caller, receiver, content, Utc::now()).await?;
        tracing::info!("Message {} sent from {} to {}", record.id, caller, receiver);

        Ok(record.into_message())
    }

    /// Hide every message between the caller and `counterpart` for both users
    ///
    /// Returns the number of messages touched, including ones already hidden.
    pub async fn clear_thread(&self, caller: UserId, counterpart: UserId) -> Result<u64, ChatError> {
        self.require_caller(caller).await?;

        let cleared = db::clear_thread(&self.pool, caller, counterpart).await?;
        tracing::info!("Cleared {} messages between {} and {}", cleared, caller, counterpart);

        Ok(cleared)
    }
}
