//! Chat Backend Module
//!
//! This module contains all server-side direct-message functionality:
//! - The conversation engine (chat lists, threads, read state, clearing)
//! - HTTP handlers for the `/chat` endpoints
//! - Database operations on the message store
//!
//! # Architecture
//!
//! - **`db`** - Message-store queries
//! - **`engine`** - `ConversationEngine`, the rules over those queries
//! - **`handlers`** - HTTP adapters
//!
//! # Example
//!
//! ```rust,no_run
//! use onechat::backend::chat::ConversationEngine;
//! use onechat::backend::server::config::in_memory_database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ConversationEngine::new(in_memory_database().await?);
//! let chats = engine.list_conversations(1).await?;
//! # Ok(())
//! # }
//! ```

/// Database operations for messages
pub mod db;

/// Conversation engine
pub mod engine;

/// HTTP handlers
pub mod handlers;

pub use engine::ConversationEngine;
pub use handlers::{chat_list, clear_chat, delete_chat, get_messages, send_message};
