//! Chat Message Data Structure
//!
//! Represents one direct message between two users, plus the request and
//! response bodies of the send and thread endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{MessageId, SharedError, UserId};

/// Client-facing text for a send without a receiver or usable content
pub const SEND_FIELDS_REQUIRED: &str = "receiver_id and content required";

/// Represents a chat message
///
/// The `timestamp` is assigned by the store at creation and serializes as
/// an RFC 3339 string. The soft-delete flag is never exposed: deleted
/// messages are simply not returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique message ID
    pub id: MessageId,
    /// Author of the message
    pub sender_id: UserId,
    /// Addressee of the message
    pub receiver_id: UserId,
    /// Message text (trimmed, never empty)
    pub content: String,
    /// Server-assigned creation time
    pub timestamp: DateTime<Utc>,
    /// Whether the receiver has opened the thread since this was sent
    pub is_read: bool,
}

/// Trim message content, rejecting text that is empty once trimmed
pub fn normalize_content(content: &str) -> Result<&str, SharedError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation("content", SEND_FIELDS_REQUIRED));
    }
    Ok(trimmed)
}

/// Require a receiver to be named
///
/// Only presence is checked; the receiver does not have to be a known user.
pub fn require_receiver(receiver_id: Option<UserId>) -> Result<UserId, SharedError> {
    receiver_id.ok_or_else(|| SharedError::validation("receiver_id", SEND_FIELDS_REQUIRED))
}

/// Request body for `POST /chat/send`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub receiver_id: Option<UserId>,
    #[serde(default)]
    pub content: String,
}

/// Response after sending a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: ChatMessage,
}

/// Response for `GET /chat/messages/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadResponse {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
}
