//! Conversation Data Structure
//!
//! One entry of a user's chat list: the counterpart, the latest visible
//! message between the pair, and how many of the counterpart's messages the
//! user has not opened yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// Chat list entry for one counterpart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSummary {
    /// The counterpart's user ID
    pub user_id: UserId,
    /// Display name of the counterpart
    pub name: String,
    /// Counterpart phone number
    pub phone: Option<String>,
    /// Text of the latest visible message, empty when there is none
    pub last_message: String,
    /// Time of the latest visible message, or the listing time when there is none
    pub last_time: DateTime<Utc>,
    /// Messages from the counterpart the caller has not read
    pub unread_count: u32,
}

impl ChatSummary {
    /// Build a summary, falling back to an empty preview stamped `now`
    /// when the pair has no visible message
    pub fn new(
        user_id: UserId,
        name: String,
        phone: Option<String>,
        last: Option<(String, DateTime<Utc>)>,
        unread_count: u32,
        now: DateTime<Utc>,
    ) -> Self {
        let (last_message, last_time) = last.unwrap_or_else(|| (String::new(), now));
        Self {
            user_id,
            name,
            phone,
            last_message,
            last_time,
            unread_count,
        }
    }
}

/// Order summaries newest-first by last message time
///
/// The sort is stable, so entries with equal times keep the order the
/// store produced them in.
pub fn sort_newest_first(chats: &mut [ChatSummary]) {
    chats.sort_by(|a, b| b.last_time.cmp(&a.last_time));
}

/// Response for `GET /chat/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatListResponse {
    pub success: bool,
    pub chats: Vec<ChatSummary>,
}
