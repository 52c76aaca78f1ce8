use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ApiKey;

pub const NO_ANSWER: &str = "I don't know.";

/// Offline answer generator. Echoes the first non-blank paragraph of the
/// stuffed context, trimmed. That paragraph always comes from the
/// highest-ranked chunk, but is only part of it when the chunk itself holds a
/// blank line.
pub struct ExtractiveLlmClient;

#[async_trait]
impl LlmClient for ExtractiveLlmClient {
    async fn complete(
        &self,
        _question: &str,
        context: &str,
        _api_key: &ApiKey,
    ) -> Result<String, LlmClientError> {
        let answer = context
            .split("\n\n")
            .map(str::trim)
            .find(|p| !p.is_empty())
            .unwrap_or(NO_ANSWER);

        Ok(answer.to_string())
    }
}
