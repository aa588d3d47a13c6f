use axum::{response::IntoResponse, Json};

use crate::models::chat::{ChatReply, ChatRequest};
use crate::services::chat_responder;

/// POST /api/chat
/// Answer a chat widget message
///
/// Matches the message against the knowledge base and returns the canned reply,
/// or a hand-off to the team when nothing matches.
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Chat reply", body = ChatReply)
    )
)]
pub async fn post_chat_message(Json(request): Json<ChatRequest>) -> impl IntoResponse {
    Json(chat_responder::reply(&request.message, &request.name))
}
