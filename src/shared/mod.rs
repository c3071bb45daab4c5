//! Shared Module
//!
//! This module contains the wire types exchanged between the OneChat server
//! and its clients. Every type here is plain data that serializes to the JSON
//! bodies of the HTTP API.
//!
//! # Overview
//!
//! - **`messaging`** - Chat messages, chat-list summaries, contact lookups
//!   and group payloads
//! - **`error`** - Validation errors raised while interpreting request data
//!
//! Identifiers are plain integers: users and messages are numbered by the
//! store in insertion order.

/// Shared error types
pub mod error;

/// Messaging types for direct chat, contacts and groups
pub mod messaging;

/// Stable identifier of a user row
pub type UserId = i64;

/// Stable identifier of a message row
pub type MessageId = i64;

/// Stable identifier of a group row
pub type GroupId = i64;

pub use error::SharedError;
pub use messaging::{
    Ack, ChatListResponse, ChatMessage, ChatSummary, CheckContactsRequest,
    CheckContactsResponse, ContactMatch, CreateGroupRequest, CreateGroupResponse,
    SendMessageRequest, SendMessageResponse, ThreadResponse,
};
