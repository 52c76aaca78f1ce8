/// The generated answer together with the retrieved chunks it was built from,
/// in rank order.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<SourceChunk>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceChunk {
    pub text: String,
    pub position: usize,
    pub score: f32,
}
