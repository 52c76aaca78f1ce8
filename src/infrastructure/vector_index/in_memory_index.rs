use crate::application::ports::{DistanceMetric, SearchResult, VectorIndex, VectorIndexError};
use crate::domain::{Chunk, Embedding};

/// Brute-force index over a flat list of entries. Every query scores every
/// stored vector with the metric chosen at build time.
#[derive(Debug)]
pub struct InMemoryVectorIndex {
    entries: Vec<(Chunk, Embedding)>,
    dimensions: usize,
    metric: DistanceMetric,
}

impl InMemoryVectorIndex {
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }
}

impl VectorIndex for InMemoryVectorIndex {
    fn build(
        entries: Vec<(Chunk, Embedding)>,
        metric: DistanceMetric,
    ) -> Result<Self, VectorIndexError> {
        let dimensions = entries
            .first()
            .map(|(_, e)| e.dimensions())
            .ok_or(VectorIndexError::Empty)?;

        if let Some((_, bad)) = entries.iter().find(|(_, e)| e.dimensions() != dimensions) {
            return Err(VectorIndexError::DimensionMismatch {
                expected: dimensions,
                actual: bad.dimensions(),
            });
        }

        Ok(Self {
            entries,
            dimensions,
            metric,
        })
    }

    fn query(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorIndexError> {
        if embedding.dimensions() != self.dimensions {
            return Err(VectorIndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.dimensions(),
            });
        }

        let mut scored: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|(chunk, vector)| SearchResult {
                chunk: chunk.clone(),
                score: self.metric.score(vector, embedding),
            })
            .collect();

        // sort_by is stable: equal scores stay in chunk order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);

        Ok(scored)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
