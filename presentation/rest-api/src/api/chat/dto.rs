use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::chat::model::ChatReply;

/// Incoming chat request.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatRequest {
    /// User message; the front-end encodes the full conversation history
    /// in this single field.
    pub message: Option<String>,
}

/// Generated reply returned to the front-end.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ChatMessageResponse {
    /// Model output text
    pub response: String,
}

impl From<ChatReply> for ChatMessageResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.text,
        }
    }
}
