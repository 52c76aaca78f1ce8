mod embedder_factory;
mod hashing_embedder;
mod openai_embedder;

pub use embedder_factory::EmbedderFactory;
pub use hashing_embedder::{DEFAULT_HASHING_DIMENSIONS, HashingEmbedder};
pub use openai_embedder::{MAX_INPUTS_PER_REQUEST, OPENAI_BASE_URL, OpenAiEmbedder};
