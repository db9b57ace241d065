use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

const PROMPT_FOR_INPUT: &str = "Please provide a message.";

const MISSING_KEY: &str = "Server setup error: Gemini API key is missing or invalid.";

const QUOTA_EXCEEDED: &str = "I apologize, the free tier usage quota has been exceeded. \
    Please try again later or consider enabling billing for higher limits.";

const GENERIC_FAILURE: &str =
    "I apologize, there was an issue processing your request. Please try again.";

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ChatError::EmptyMessage => (StatusCode::BAD_REQUEST, PROMPT_FOR_INPUT),
            ChatError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, MISSING_KEY),
            ChatError::QuotaExceeded => (StatusCode::INTERNAL_SERVER_ERROR, QUOTA_EXCEEDED),
            ChatError::GenerationFailed => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE),
        };

        (
            status,
            Json(ErrorResponse {
                response: message.to_string(),
            }),
        )
    }
}
