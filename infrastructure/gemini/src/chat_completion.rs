use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{ChatReply, create_reply};
use business::domain::chat::services::ChatCompletionService;

use crate::client::GeminiClient;

const MODEL: &str = "gemini-2.5-flash-lite";
const TEMPERATURE: f64 = 0.2;

const SYSTEM_PROMPT: &str = r#"Your name is Test. You are an advanced, general-purpose AI assistant.
You were created and developed by Proll. Your primary purpose is to serve
the users of this custom application with highly knowledgeable, friendly,
and enthusiastic expert guidance.

Your core intelligence is powered by Google's cutting-edge Gemini 2.5 Flash model.

Use Markdown extensively (headings, bolding, lists) to make responses easy to read.
CRITICAL: When providing code snippets, always wrap the code in three backticks (```)
specifying the language (e.g., ```python) and ensure there is an empty line before the next paragraph."#;

pub struct ChatCompletionGemini {
    client: GeminiClient,
}

impl ChatCompletionGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_request(message: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String, ChatError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(ChatError::GenerationFailed)
    }

    /// Classifies a non-success upstream response into a chat error.
    ///
    /// Quota exhaustion is detected from the HTTP status or from the
    /// structured `error.status` field of the Gemini error envelope, never
    /// from free-text matching on the error message.
    fn classify_failure(status: StatusCode, body: &str) -> ChatError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return ChatError::QuotaExceeded;
        }

        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if envelope.error.status.as_deref() == Some("RESOURCE_EXHAUSTED") {
                return ChatError::QuotaExceeded;
            }
        }

        ChatError::GenerationFailed
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionGemini {
    async fn complete(&self, message: &str) -> Result<ChatReply, ChatError> {
        let body = Self::build_request(message);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(MODEL))
            .json(&body)
            .send()
            .await
            .map_err(|_| ChatError::GenerationFailed)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &error_body));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| ChatError::GenerationFailed)?;

        create_reply(Self::extract_text(data)?)
    }
}

// Gemini generateContent request/response types.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: SystemInstruction,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_request_in_gemini_wire_format() {
        let request = ChatCompletionGemini::build_request("Hello there");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Hello there");
        assert_eq!(
            value["systemInstruction"]["parts"][0]["text"],
            SYSTEM_PROMPT
        );
        assert_eq!(value["generationConfig"]["temperature"], 0.2);
    }

    #[test]
    fn should_extract_text_from_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "role": "model",
                            "parts": [{"text": "Generated answer"}]
                        },
                        "finishReason": "STOP"
                    }
                ]
            }"#,
        )
        .unwrap();

        let text = ChatCompletionGemini::extract_text(response).unwrap();
        assert_eq!(text, "Generated answer");
    }

    #[test]
    fn should_fail_extraction_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();

        let result = ChatCompletionGemini::extract_text(response);
        assert!(matches!(result.unwrap_err(), ChatError::GenerationFailed));
    }

    #[test]
    fn should_fail_extraction_when_candidate_has_no_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model"}}]}"#,
        )
        .unwrap();

        let result = ChatCompletionGemini::extract_text(response);
        assert!(matches!(result.unwrap_err(), ChatError::GenerationFailed));
    }

    #[test]
    fn should_classify_http_429_as_quota_exceeded() {
        let error = ChatCompletionGemini::classify_failure(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(matches!(error, ChatError::QuotaExceeded));
    }

    #[test]
    fn should_classify_resource_exhausted_envelope_as_quota_exceeded() {
        let body = r#"{
            "error": {
                "code": 429,
                "message": "Quota exceeded for quota metric",
                "status": "RESOURCE_EXHAUSTED"
            }
        }"#;

        let error = ChatCompletionGemini::classify_failure(StatusCode::BAD_REQUEST, body);
        assert!(matches!(error, ChatError::QuotaExceeded));
    }

    #[test]
    fn should_classify_other_failures_as_generation_failed() {
        let body = r#"{
            "error": {
                "code": 500,
                "message": "Internal error",
                "status": "INTERNAL"
            }
        }"#;

        let error = ChatCompletionGemini::classify_failure(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert!(matches!(error, ChatError::GenerationFailed));
    }

    #[test]
    fn should_classify_unparseable_error_body_as_generation_failed() {
        let error =
            ChatCompletionGemini::classify_failure(StatusCode::BAD_GATEWAY, "upstream blew up");
        assert!(matches!(error, ChatError::GenerationFailed));
    }
}
