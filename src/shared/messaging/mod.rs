//! Messaging Types
//!
//! Wire types for direct messages, chat lists, contact discovery and groups.

pub mod contact;
pub mod conversation;
pub mod group;
pub mod message;

use serde::{Deserialize, Serialize};

pub use contact::{normalize_phone, CheckContactsRequest, CheckContactsResponse, ContactMatch};
pub use conversation::{ChatListResponse, ChatSummary};
pub use group::{CreateGroupRequest, CreateGroupResponse};
pub use message::{ChatMessage, SendMessageRequest, SendMessageResponse, ThreadResponse};

/// Bare success acknowledgement, used by the clear/delete endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
