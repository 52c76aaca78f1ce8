mod distance_metric;
mod embedder;
mod file_loader;
mod llm_client;
mod search_result;
mod text_splitter;
mod vector_index;

pub use distance_metric::DistanceMetric;
pub use embedder::{Embedder, EmbedderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_index::{VectorIndex, VectorIndexError};
