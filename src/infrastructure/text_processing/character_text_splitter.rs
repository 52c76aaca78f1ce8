use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 0;

/// Fixed-width character windows. Each window holds at most `chunk_size`
/// characters and shares `chunk_overlap` characters with its predecessor.
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl CharacterTextSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    fn validate(&self) -> Result<(), TextSplitterError> {
        if self.chunk_size == 0 {
            return Err(TextSplitterError::InvalidConfiguration(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(TextSplitterError::InvalidConfiguration(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

#[async_trait]
impl TextSplitter for CharacterTextSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        self.validate()?;

        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();

        if total_len == 0 {
            return Err(TextSplitterError::EmptyText);
        }

        let step = self.chunk_size - self.chunk_overlap;
        let mut chunks = Vec::with_capacity(total_len.div_ceil(step));
        let mut offset = 0;

        loop {
            let end = (offset + self.chunk_size).min(total_len);
            let chunk_text: String = chars[offset..end].iter().collect();

            chunks.push(Chunk::new(chunk_text, document_id, chunks.len(), offset));

            if end == total_len {
                break;
            }
            offset += step;
        }

        Ok(chunks)
    }
}
