mod character_text_splitter;
mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;

pub use character_text_splitter::{
    CharacterTextSplitter, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
};
pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
