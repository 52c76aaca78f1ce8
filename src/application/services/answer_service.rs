use std::marker::PhantomData;
use std::sync::Arc;

use crate::application::ports::{
    DistanceMetric, Embedder, EmbedderError, FileLoader, FileLoaderError, LlmClient,
    LlmClientError, TextSplitter, TextSplitterError, VectorIndex, VectorIndexError,
};
use crate::domain::{Answer, ApiKey, Document, SourceChunk};

pub const DEFAULT_TOP_K: usize = 4;

const CONTEXT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy)]
pub struct RetrievalOptions {
    pub top_k: usize,
    pub distance_metric: DistanceMetric,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            distance_metric: DistanceMetric::Cosine,
        }
    }
}

/// Runs one document and one question through extraction, chunking,
/// embedding, indexing, retrieval and generation. Nothing is kept between
/// calls: the index is built inside [`AnswerService::answer`] and dropped
/// with it, as is the api key.
pub struct AnswerService<F, T, I>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    I: VectorIndex,
{
    file_loader: Arc<F>,
    text_splitter: Arc<T>,
    embedder: Arc<dyn Embedder>,
    llm_client: Arc<dyn LlmClient>,
    options: RetrievalOptions,
    _index: PhantomData<fn() -> I>,
}

impl<F, T, I> AnswerService<F, T, I>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    I: VectorIndex,
{
    pub fn new(
        file_loader: Arc<F>,
        text_splitter: Arc<T>,
        embedder: Arc<dyn Embedder>,
        llm_client: Arc<dyn LlmClient>,
        options: RetrievalOptions,
    ) -> Self {
        Self {
            file_loader,
            text_splitter,
            embedder,
            llm_client,
            options,
            _index: PhantomData,
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            media_type = %document.media_type,
        )
    )]
    pub async fn answer(
        &self,
        document: Document,
        question: &str,
        api_key: String,
    ) -> Result<Answer, AnswerError> {
        let api_key = ApiKey::parse(api_key).map_err(|_| AnswerError::InvalidCredentialFormat)?;

        let text = self.file_loader.extract_text(&document).await?;
        let document_id = document.id;
        drop(document);
        tracing::debug!(bytes = text.len(), "Text extracted");

        let chunks = self.text_splitter.split(&text, document_id).await?;
        tracing::debug!(chunk_count = chunks.len(), "Text split");

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = self.embedder.embed_batch(&texts, &api_key).await?;

        if embeddings.len() != chunks.len() {
            return Err(AnswerError::Service(format!(
                "embedding: expected {} vectors, got {}",
                chunks.len(),
                embeddings.len()
            )));
        }

        let index = I::build(
            chunks.into_iter().zip(embeddings).collect(),
            self.options.distance_metric,
        )?;
        tracing::debug!(entries = index.len(), "Vector index built");

        let query_embedding = self.embedder.embed(question, &api_key).await?;
        let results = index.query(&query_embedding, self.options.top_k)?;

        let context = results
            .iter()
            .map(|r| r.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);

        let text = self
            .llm_client
            .complete(question, &context, &api_key)
            .await?;

        tracing::info!(
            sources_count = results.len(),
            top_k = self.options.top_k,
            "Answer generated"
        );

        let sources = results
            .into_iter()
            .map(|r| SourceChunk {
                text: r.chunk.text,
                position: r.chunk.position,
                score: r.score,
            })
            .collect();

        Ok(Answer { text, sources })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("invalid api key format: expected a key starting with \"sk-\"")]
    InvalidCredentialFormat,
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("service error: {0}")]
    Service(String),
    #[error("could not read document: {0}")]
    Extraction(String),
    #[error("document contains no text")]
    EmptyDocument,
    #[error("chunking: {0}")]
    Chunking(String),
}

impl From<FileLoaderError> for AnswerError {
    fn from(e: FileLoaderError) -> Self {
        match e {
            FileLoaderError::UnsupportedContentType(media_type) => {
                Self::UnsupportedFormat(media_type)
            }
            other => Self::Extraction(other.to_string()),
        }
    }
}

impl From<TextSplitterError> for AnswerError {
    fn from(e: TextSplitterError) -> Self {
        match e {
            TextSplitterError::EmptyText => Self::EmptyDocument,
            other => Self::Chunking(other.to_string()),
        }
    }
}

impl From<EmbedderError> for AnswerError {
    fn from(e: EmbedderError) -> Self {
        match e {
            EmbedderError::AuthenticationFailed(msg) => Self::Authentication(msg),
            other => Self::Service(format!("embedding: {other}")),
        }
    }
}

impl From<VectorIndexError> for AnswerError {
    fn from(e: VectorIndexError) -> Self {
        Self::Service(format!("vector index: {e}"))
    }
}

impl From<LlmClientError> for AnswerError {
    fn from(e: LlmClientError) -> Self {
        match e {
            LlmClientError::AuthenticationFailed(msg) => Self::Authentication(msg),
            other => Self::Service(format!("completion: {other}")),
        }
    }
}
