use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Text) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.media_type.clone(),
            ));
        }

        let text = std::str::from_utf8(&document.content)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text.to_string())
    }
}
