use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;

pub struct SendMessageParams {
    pub message: String,
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatReply, ChatError>;
}
