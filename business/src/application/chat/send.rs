use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;
use crate::domain::chat::services::ChatCompletionService;
use crate::domain::chat::use_cases::send::{SendMessageParams, SendMessageUseCase};
use crate::domain::logger::Logger;

pub struct SendMessageUseCaseImpl {
    pub completion: Arc<dyn ChatCompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, params: SendMessageParams) -> Result<ChatReply, ChatError> {
        if params.message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.logger.info(&format!(
            "Forwarding chat message ({} chars)",
            params.message.len()
        ));

        // The caller sends the full conversation as one message, so a single
        // completion call carries the whole context.
        match self.completion.complete(&params.message).await {
            Ok(reply) => {
                self.logger
                    .info(&format!("Received reply ({} chars)", reply.text.len()));
                Ok(reply)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Chat completion failed: {}", err));
                Err(err)
            }
        }
    }
}
