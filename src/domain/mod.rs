mod answer;
mod api_key;
mod chunk;
mod document;
mod embedding;

pub use answer::{Answer, SourceChunk};
pub use api_key::{API_KEY_PREFIX, ApiKey, ApiKeyError};
pub use chunk::{Chunk, ChunkId};
pub use document::{ContentType, Document, DocumentId};
pub use embedding::Embedding;
