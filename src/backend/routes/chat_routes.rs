/**
 * Chat Route Handlers
 *
 * This module defines the direct-message, contact and group routes. All of
 * them require a bearer token.
 *
 * # Routes
 *
 * - `GET /chat/list` - Chat list with unread counts
 * - `GET /chat/messages/{other_id}` - Thread with a user; marks it read
 * - `POST /chat/send` - Send a message
 * - `DELETE /chat/clear/{other_id}` - Clear a thread for both users
 * - `DELETE /chat/delete/{other_id}` - Same as clear
 * - `POST /contacts/check` - Find users by phone number
 * - `POST /group/create` - Create a group
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::chat::{chat_list, clear_chat, delete_chat, get_messages, send_message};
use crate::backend::contacts::check_contacts;
use crate::backend::groups::create_group;
use crate::backend::server::state::AppState;

/// Configure chat-related routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/list", get(chat_list))
        .route("/chat/messages/{other_id}", get(get_messages))
        .route("/chat/send", post(send_message))
        .route("/chat/clear/{other_id}", delete(clear_chat))
        .route("/chat/delete/{other_id}", delete(delete_chat))
        .route("/contacts/check", post(check_contacts))
        .route("/group/create", post(create_group))
}
