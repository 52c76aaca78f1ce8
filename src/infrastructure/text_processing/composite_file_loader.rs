use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{PdfAdapter, PlainTextAdapter};

/// Dispatches on the document's declared content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

impl Default for CompositeFileLoader {
    fn default() -> Self {
        Self::new(vec![
            (ContentType::Pdf, Arc::new(PdfAdapter::new())),
            (ContentType::Text, Arc::new(PlainTextAdapter)),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, document: &Document) -> Result<String, FileLoaderError> {
        let adapter = document
            .content_type()
            .and_then(|ct| self.adapters.get(&ct))
            .ok_or_else(|| FileLoaderError::UnsupportedContentType(document.media_type.clone()))?;

        adapter.extract_text(document).await
    }
}
