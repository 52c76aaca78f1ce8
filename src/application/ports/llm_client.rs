use async_trait::async_trait;

use crate::domain::ApiKey;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Answers `question` from the stuffed `context` with a single completion call.
    async fn complete(
        &self,
        question: &str,
        context: &str,
        api_key: &ApiKey,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("completion provider rejected the api key: {0}")]
    AuthenticationFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
