//! Chat HTTP Handlers
//!
//! Thin adapters from HTTP to the conversation engine. The caller ID comes
//! from the bearer token via `AuthUser`.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::chat::engine::ConversationEngine;
use crate::backend::error::ChatError;
use crate::backend::middleware::AuthUser;
use crate::shared::{Ack, ChatListResponse, SendMessageRequest, SendMessageResponse, ThreadResponse, UserId};

/// `GET /chat/list`
pub async fn chat_list(
    State(engine): State<ConversationEngine>,
    AuthUser(me): AuthUser,
) -> Result<Json<ChatListResponse>, ChatError> {
    let chats = engine.list_conversations(me).await?;
    Ok(Json(ChatListResponse { success: true, chats }))
}

/// `GET /chat/messages/{other_id}`
///
/// Also marks the counterpart's messages to the caller as read.
pub async fn get_messages(
    State(engine): State<ConversationEngine>,
    AuthUser(me): AuthUser,
    Path(other_id): Path<UserId>,
) -> Result<Json<ThreadResponse>, ChatError> {
    let messages = engine.get_thread(me, other_id).await?;
    Ok(Json(ThreadResponse { success: true, messages }))
}

/// `POST /chat/send`
pub async fn send_message(
    State(engine): State<ConversationEngine>,
    AuthUser(me): AuthUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ChatError> {
    let message = engine.send_message(me, request.receiver_id, &request.content).await?;
    Ok(Json(SendMessageResponse { success: true, message }))
}

/// `DELETE /chat/clear/{other_id}`
pub async fn clear_chat(
    State(engine): State<ConversationEngine>,
    AuthUser(me): AuthUser,
    Path(other_id): Path<UserId>,
) -> Result<Json<Ack>, ChatError> {
    engine.clear_thread(me, other_id).await?;
    Ok(Json(Ack::ok()))
}

/// `DELETE /chat/delete/{other_id}`
///
/// Same shared clear as `clear_chat`.
pub async fn delete_chat(
    engine: State<ConversationEngine>,
    caller: AuthUser,
    other_id: Path<UserId>,
) -> Result<Json<Ack>, ChatError> {
    clear_chat(engine, caller, other_id).await
}
