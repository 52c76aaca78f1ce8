use super::{DistanceMetric, SearchResult};
use crate::domain::{Chunk, Embedding};

/// A similarity index built once per request and read-only afterwards.
pub trait VectorIndex: Send + Sync + Sized {
    fn build(
        entries: Vec<(Chunk, Embedding)>,
        metric: DistanceMetric,
    ) -> Result<Self, VectorIndexError>;

    /// Returns at most `top_k` entries ordered by descending score. Equal scores
    /// keep insertion order.
    fn query(&self, embedding: &Embedding, top_k: usize)
    -> Result<Vec<SearchResult>, VectorIndexError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VectorIndexError {
    #[error("cannot build an index without entries")]
    Empty,
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
