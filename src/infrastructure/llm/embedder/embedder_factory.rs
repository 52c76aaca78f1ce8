use std::sync::Arc;

use crate::application::ports::Embedder;
use crate::presentation::config::EmbeddingsSettings;

use super::{HashingEmbedder, OpenAiEmbedder};

pub struct EmbedderFactory;

impl EmbedderFactory {
    /// Hosted OpenAI-compatible embeddings, or the local hashing embedder when
    /// running in scaffold mode.
    pub fn create(settings: &EmbeddingsSettings, scaffold: bool) -> Arc<dyn Embedder> {
        if scaffold {
            tracing::info!(
                dimensions = settings.scaffold_dimensions,
                "Using offline hashing embedder"
            );
            return Arc::new(HashingEmbedder::new(settings.scaffold_dimensions));
        }

        tracing::info!(
            model = %settings.model,
            base_url = %settings.base_url,
            "Using OpenAI embedding model"
        );
        Arc::new(OpenAiEmbedder::new(
            settings.base_url.clone(),
            settings.model.clone(),
        ))
    }
}
