use askdoc::application::ports::{TextSplitter, TextSplitterError};
use askdoc::domain::{Chunk, DocumentId};
use askdoc::infrastructure::text_processing::CharacterTextSplitter;

const SMALL_CHUNK_SIZE: usize = 10;
const SMALL_OVERLAP: usize = 3;

fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
    let mut text = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let skip = if i == 0 { 0 } else { overlap };
        text.extend(chunk.text.chars().skip(skip));
    }
    text
}

#[tokio::test]
async fn given_text_when_splitting_then_every_chunk_respects_chunk_size() {
    let splitter = CharacterTextSplitter::new(SMALL_CHUNK_SIZE, SMALL_OVERLAP);
    let text = "This is a test document with some content.";
    let doc_id = DocumentId::new();

    let chunks = splitter.split(text, doc_id).await.unwrap();

    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(chunk.char_len() <= SMALL_CHUNK_SIZE);
        assert_eq!(chunk.document_id, doc_id);
    }
}

#[tokio::test]
async fn given_overlapping_chunks_when_removing_overlap_then_reconstructs_original_text() {
    let splitter = CharacterTextSplitter::new(SMALL_CHUNK_SIZE, SMALL_OVERLAP);
    let text = "The quick brown fox jumps over the lazy dog, then naps in the sun.";

    let chunks = splitter.split(text, DocumentId::new()).await.unwrap();

    assert_eq!(reconstruct(&chunks, SMALL_OVERLAP), text);
}

#[tokio::test]
async fn given_various_configurations_when_splitting_then_reconstruction_holds() {
    let text = "Ünïcödé text — with multibyte characters — should split on char boundaries.";

    for (size, overlap) in [(1, 0), (2, 1), (7, 0), (7, 6), (13, 4), (200, 10)] {
        let splitter = CharacterTextSplitter::new(size, overlap);
        let chunks = splitter.split(text, DocumentId::new()).await.unwrap();

        assert_eq!(
            reconstruct(&chunks, overlap),
            text,
            "size={size} overlap={overlap}"
        );
        assert!(chunks.iter().all(|c| c.char_len() <= size));
    }
}

#[tokio::test]
async fn given_consecutive_chunks_when_comparing_then_share_exactly_the_overlap() {
    let splitter = CharacterTextSplitter::new(SMALL_CHUNK_SIZE, SMALL_OVERLAP);
    let text = "abcdefghijklmnopqrstuvwxyz";

    let chunks = splitter.split(text, DocumentId::new()).await.unwrap();

    for pair in chunks.windows(2) {
        let tail: String = pair[0]
            .text
            .chars()
            .skip(pair[0].char_len() - SMALL_OVERLAP)
            .collect();
        let head: String = pair[1].text.chars().take(SMALL_OVERLAP).collect();
        assert_eq!(tail, head);
    }
}

#[tokio::test]
async fn given_text_when_splitting_then_positions_and_offsets_follow_source_order() {
    let splitter = CharacterTextSplitter::new(4, 1);
    let text = "abcdefghij";

    let chunks = splitter.split(text, DocumentId::new()).await.unwrap();

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["abcd", "defg", "ghij"]);
    let positions: Vec<usize> = chunks.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    let offsets: Vec<usize> = chunks.iter().map(|c| c.offset).collect();
    assert_eq!(offsets, vec![0, 3, 6]);
}

#[tokio::test]
async fn given_text_shorter_than_chunk_size_when_splitting_then_returns_single_chunk() {
    let splitter = CharacterTextSplitter::default();
    let text = "The sky is blue. Grass is green.";

    let chunks = splitter.split(text, DocumentId::new()).await.unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, text);
}

#[tokio::test]
async fn given_same_input_when_splitting_twice_then_produces_same_chunk_texts() {
    let splitter = CharacterTextSplitter::new(SMALL_CHUNK_SIZE, SMALL_OVERLAP);
    let text = "Determinism matters for reproducible retrieval.";

    let first = splitter.split(text, DocumentId::new()).await.unwrap();
    let second = splitter.split(text, DocumentId::new()).await.unwrap();

    let first: Vec<_> = first.into_iter().map(|c| (c.text, c.offset)).collect();
    let second: Vec<_> = second.into_iter().map(|c| (c.text, c.offset)).collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn given_empty_text_when_splitting_then_fails_fast() {
    let splitter = CharacterTextSplitter::new(SMALL_CHUNK_SIZE, SMALL_OVERLAP);

    let result = splitter.split("", DocumentId::new()).await;

    assert!(matches!(result, Err(TextSplitterError::EmptyText)));
}

#[tokio::test]
async fn given_overlap_not_smaller_than_chunk_size_when_splitting_then_rejects_configuration() {
    let splitter = CharacterTextSplitter::new(5, 5);

    let result = splitter.split("some text", DocumentId::new()).await;

    assert!(matches!(
        result,
        Err(TextSplitterError::InvalidConfiguration(_))
    ));
}

#[tokio::test]
async fn given_zero_chunk_size_when_splitting_then_rejects_configuration() {
    let splitter = CharacterTextSplitter::new(0, 0);

    let result = splitter.split("some text", DocumentId::new()).await;

    assert!(matches!(
        result,
        Err(TextSplitterError::InvalidConfiguration(_))
    ));
}
