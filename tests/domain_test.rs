use askdoc::domain::{ApiKey, ApiKeyError, Chunk, ContentType, Document, DocumentId, Embedding};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_text_mime_with_charset_when_parsing_then_returns_text_content_type() {
    assert_eq!(
        ContentType::from_mime("text/plain; charset=utf-8"),
        Some(ContentType::Text)
    );
}

#[test]
fn given_zip_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("application/zip"), None);
}

#[test]
fn given_document_with_declared_type_when_reading_content_type_then_maps_declared_mime() {
    let document = Document::new(
        "notes.txt".to_string(),
        "text/plain".to_string(),
        b"hello".to_vec(),
    );

    assert_eq!(document.content_type(), Some(ContentType::Text));
    assert_eq!(document.content, b"hello");
}

#[test]
fn given_chunk_with_multibyte_text_when_measuring_then_counts_characters() {
    let chunk = Chunk::new("héllo".to_string(), DocumentId::new(), 0, 0);
    assert_eq!(chunk.char_len(), 5);
}

#[test]
fn given_key_with_provider_prefix_when_parsing_then_accepts() {
    let key = ApiKey::parse("sk-abc123").unwrap();
    assert_eq!(key.expose(), "sk-abc123");
}

#[test]
fn given_key_without_provider_prefix_when_parsing_then_rejects_format() {
    let result = ApiKey::parse("abc123");
    assert!(matches!(result, Err(ApiKeyError::InvalidFormat)));
}

#[test]
fn given_empty_key_when_parsing_then_rejects_format() {
    assert!(ApiKey::parse("").is_err());
}

#[test]
fn given_api_key_when_formatting_then_secret_is_not_printed() {
    let key = ApiKey::parse("sk-very-secret-value").unwrap();

    let debug = format!("{:?}", key);
    let display = key.to_string();

    assert!(!debug.contains("very-secret-value"));
    assert!(!display.contains("very-secret-value"));
}

#[test]
fn given_embedding_when_checking_dimensions_then_returns_correct_size() {
    let embedding = Embedding::new(vec![0.1, 0.2, 0.3]);
    assert_eq!(embedding.dimensions(), 3);
}

#[test]
fn given_identical_vectors_when_computing_similarity_then_returns_one() {
    let a = Embedding::new(vec![1.0, 0.0, 0.0]);
    let b = Embedding::new(vec![1.0, 0.0, 0.0]);

    assert!((a.cosine_similarity(&b) - 1.0).abs() < 0.001);
}

#[test]
fn given_orthogonal_vectors_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![1.0, 0.0, 0.0]);
    let b = Embedding::new(vec![0.0, 1.0, 0.0]);

    assert!(a.cosine_similarity(&b).abs() < 0.001);
}

#[test]
fn given_zero_vector_when_computing_similarity_then_returns_zero() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![1.0, 1.0]);

    assert_eq!(a.cosine_similarity(&b), 0.0);
}

#[test]
fn given_two_points_when_computing_euclidean_distance_then_returns_length() {
    let a = Embedding::new(vec![0.0, 0.0]);
    let b = Embedding::new(vec![3.0, 4.0]);

    assert!((a.euclidean_distance(&b) - 5.0).abs() < 0.001);
}
