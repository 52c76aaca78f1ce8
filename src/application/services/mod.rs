mod answer_service;

pub use answer_service::{AnswerError, AnswerService, DEFAULT_TOP_K, RetrievalOptions};
