#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.empty_message")]
    EmptyMessage,
    #[error("chat.not_configured")]
    NotConfigured,
    #[error("chat.quota_exceeded")]
    QuotaExceeded,
    #[error("chat.generation_failed")]
    GenerationFailed,
}
