use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::errors::ChatError;
use business::domain::chat::use_cases::send::{SendMessageParams, SendMessageUseCase};

use crate::api::chat::dto::{ChatMessageResponse, ChatRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    send_use_case: Option<Arc<dyn SendMessageUseCase>>,
}

impl ChatApi {
    /// `None` means the upstream credential was missing at startup; the
    /// route then answers 503 without touching the request body.
    pub fn new(send_use_case: Option<Arc<dyn SendMessageUseCase>>) -> Self {
        Self { send_use_case }
    }
}

/// Chat API
///
/// Relays a chat message to the generative model and returns its reply.
#[OpenApi]
impl ChatApi {
    /// Send a chat message
    ///
    /// Forwards the message to the model with the fixed persona and returns
    /// the generated text. The caller is responsible for sending the full
    /// conversation context each time.
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn send_message(&self, body: Json<ChatRequest>) -> SendChatResponse {
        let Some(use_case) = &self.send_use_case else {
            let (_, json) = ChatError::NotConfigured.into_error_response();
            return SendChatResponse::ServiceUnavailable(json);
        };

        let message = body.0.message.unwrap_or_default();

        match use_case.execute(SendMessageParams { message }).await {
            Ok(reply) => SendChatResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendChatResponse::BadRequest(json),
                    503 => SendChatResponse::ServiceUnavailable(json),
                    _ => SendChatResponse::InternalError(json),
                }
            }
        }
    }

    /// Preflight for the chat endpoint
    ///
    /// Answers an empty 200 whether or not the service is configured.
    #[oai(path = "/chat", method = "options", tag = "ApiTags::Chat")]
    async fn chat_preflight(&self) -> PreflightResponse {
        PreflightResponse::Ok
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatMessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PreflightResponse {
    #[oai(status = 200)]
    Ok,
}
