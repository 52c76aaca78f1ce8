use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{ApiKey, Embedding};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider limit on the number of inputs in one `/embeddings` request.
pub const MAX_INPUTS_PER_REQUEST: usize = 2048;

pub struct OpenAiEmbedder {
    client: Client,
    base_url: String,
    model: String,
    max_inputs_per_request: usize,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [&'a str],
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            max_inputs_per_request: MAX_INPUTS_PER_REQUEST,
        }
    }

    pub fn with_max_inputs_per_request(mut self, max_inputs: usize) -> Self {
        self.max_inputs_per_request = max_inputs.clamp(1, MAX_INPUTS_PER_REQUEST);
        self
    }

    async fn embed_request(
        &self,
        texts: &[&str],
        api_key: &ApiKey,
    ) -> Result<Vec<Embedding>, EmbedderError> {
        let request_body = EmbeddingRequest {
            input: texts,
            model: &self.model,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(api_key.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmbedderError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedderError::AuthenticationFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(EmbedderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedderError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let mut embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbedderError::InvalidResponse(e.to_string()))?;

        if embedding_response.data.len() != texts.len() {
            return Err(EmbedderError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embedding_response.data.len()
            )));
        }

        embedding_response.data.sort_by_key(|d| d.index);

        Ok(embedding_response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.embedding))
            .collect())
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str, api_key: &ApiKey) -> Result<Embedding, EmbedderError> {
        let results = self.embed_batch(&[text], api_key).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| EmbedderError::InvalidResponse("empty response".to_string()))
    }

    #[tracing::instrument(skip(self, texts, api_key), fields(batch_size = texts.len(), model = %self.model))]
    async fn embed_batch(
        &self,
        texts: &[&str],
        api_key: &ApiKey,
    ) -> Result<Vec<Embedding>, EmbedderError> {
        let mut embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(self.max_inputs_per_request) {
            embeddings.extend(self.embed_request(batch, api_key).await?);
        }

        tracing::debug!(
            requests = texts.len().div_ceil(self.max_inputs_per_request),
            "Embedding batch complete"
        );

        Ok(embeddings)
    }
}
