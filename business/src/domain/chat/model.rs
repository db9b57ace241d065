use chrono::{DateTime, Utc};

/// A reply produced by the upstream generative model.
///
/// The text is relayed verbatim; the caller owns the conversation history,
/// so a reply carries no session or ordering information.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Creates a new ChatReply with validation.
pub fn create_reply(text: String) -> Result<ChatReply, super::errors::ChatError> {
    if text.trim().is_empty() {
        return Err(super::errors::ChatError::GenerationFailed);
    }

    Ok(ChatReply {
        text,
        created_at: Utc::now(),
    })
}
