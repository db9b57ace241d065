/// Configuration for Gemini API access.
///
/// The credential is optional: a missing key disables the chat endpoint at
/// wiring time while the page and health endpoints keep serving.
pub struct GeminiConfig {
    pub api_key: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        Self { api_key }
    }
}
