use async_trait::async_trait;

use crate::domain::{ApiKey, Embedding};

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str, api_key: &ApiKey) -> Result<Embedding, EmbedderError>;
    async fn embed_batch(
        &self,
        texts: &[&str],
        api_key: &ApiKey,
    ) -> Result<Vec<Embedding>, EmbedderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedderError {
    #[error("embedding provider rejected the api key: {0}")]
    AuthenticationFailed(String),
    #[error("embedding api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("embedding rate limited")]
    RateLimited,
    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
}
