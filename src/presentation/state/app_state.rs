use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{FileLoader, TextSplitter, VectorIndex};
use crate::application::services::AnswerService;

pub struct AppState<F, T, I>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    I: VectorIndex,
{
    pub answer_service: Arc<AnswerService<F, T, I>>,
    /// Held for the whole pipeline run so only one request is processed at a time.
    pub request_gate: Arc<Mutex<()>>,
}

impl<F, T, I> AppState<F, T, I>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    I: VectorIndex,
{
    pub fn new(answer_service: Arc<AnswerService<F, T, I>>) -> Self {
        Self {
            answer_service,
            request_gate: Arc::new(Mutex::new(())),
        }
    }
}

impl<F, T, I> Clone for AppState<F, T, I>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    I: VectorIndex,
{
    fn clone(&self) -> Self {
        Self {
            answer_service: Arc::clone(&self.answer_service),
            request_gate: Arc::clone(&self.request_gate),
        }
    }
}
