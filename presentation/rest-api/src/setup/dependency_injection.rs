use std::sync::Arc;

use logger::TracingLogger;

use gemini::chat_completion::ChatCompletionGemini;
use gemini::client::GeminiClient;

use business::application::chat::send::SendMessageUseCaseImpl;
use business::domain::chat::use_cases::send::SendMessageUseCase;
use business::domain::logger::Logger;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub chat_api: crate::api::chat::routes::ChatApi,
    pub health_api: crate::api::health::routes::Api,
    pub pages_api: crate::api::pages::routes::PagesApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let pages_api = crate::api::pages::routes::PagesApi::new();

        // Infrastructure adapter, wired only when the credential is present.
        // Without it the chat route answers 503 while the page stays up.
        let gemini_config = GeminiConfig::from_env();
        let send_use_case: Option<Arc<dyn SendMessageUseCase>> = match gemini_config.api_key {
            Some(api_key) => {
                let completion = Arc::new(ChatCompletionGemini::new(GeminiClient::new(api_key)));
                Some(Arc::new(SendMessageUseCaseImpl {
                    completion,
                    logger: logger.clone(),
                }))
            }
            None => {
                logger.error(
                    "GOOGLE_API_KEY environment variable not set. Chat endpoint disabled.",
                );
                None
            }
        };

        let chat_api = crate::api::chat::routes::ChatApi::new(send_use_case);

        Self {
            chat_api,
            health_api,
            pages_api,
        }
    }
}
