use async_trait::async_trait;

use super::errors::ChatError;
use super::model::ChatReply;

/// Service port for producing a completion from the upstream generative model.
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, message: &str) -> Result<ChatReply, ChatError>;
}
