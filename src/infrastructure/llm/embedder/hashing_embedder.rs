use std::hash::{DefaultHasher, Hash, Hasher};

use async_trait::async_trait;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::{ApiKey, Embedding};

pub const DEFAULT_HASHING_DIMENSIONS: usize = 256;

/// Offline embedder: lowercased alphanumeric tokens are hashed into a fixed
/// number of buckets and the resulting count vector is L2-normalised.
/// Identical input always yields the identical vector.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn vectorize(&self, text: &str) -> Embedding {
        let mut values = vec![0.0f32; self.dimensions];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            token.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimensions as u64) as usize;
            values[bucket] += 1.0;
        }

        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            values.iter_mut().for_each(|v| *v /= norm);
        }

        Embedding::new(values)
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_HASHING_DIMENSIONS)
    }
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed(&self, text: &str, _api_key: &ApiKey) -> Result<Embedding, EmbedderError> {
        Ok(self.vectorize(text))
    }

    async fn embed_batch(
        &self,
        texts: &[&str],
        _api_key: &ApiKey,
    ) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }
}
