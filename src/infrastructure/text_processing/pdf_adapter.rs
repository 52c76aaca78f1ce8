use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Reads every page in order and joins the page texts with no separator.
    /// The parsed document and the backing temp file are both released when
    /// this returns.
    fn extract_pages(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let mut doc = PdfDocument::open(temp_file.path())
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut text = String::new();
        for page_index in 0..page_count {
            let page_text = doc.extract_text(page_index).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            text.push_str(&page_text);
        }

        tracing::debug!(page_count, bytes = text.len(), "PDF pages extracted");

        Ok(text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        if document.content_type() != Some(ContentType::Pdf) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.media_type.clone(),
            ));
        }

        let data = document.content.clone();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::info!(bytes = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
