use serde::Deserialize;

use crate::domain::Embedding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Cosine,
    Euclidean,
    DotProduct,
}

impl DistanceMetric {
    /// Similarity score where higher always means closer. Euclidean distance is
    /// negated so every metric ranks in descending order.
    pub fn score(&self, a: &Embedding, b: &Embedding) -> f32 {
        match self {
            Self::Cosine => a.cosine_similarity(b),
            Self::Euclidean => -a.euclidean_distance(b),
            Self::DotProduct => a.dot_product(b),
        }
    }
}
