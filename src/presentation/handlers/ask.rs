use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, TextSplitter, VectorIndex};
use crate::application::services::AnswerError;
use crate::domain::{Answer, Document};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";
pub const QUESTION_FIELD: &str = "question";
pub const API_KEY_FIELD: &str = "api_key";

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<SourceResponse>,
}

#[derive(Serialize)]
pub struct SourceResponse {
    pub text: String,
    pub position: usize,
    pub score: f32,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

impl From<Answer> for AskResponse {
    fn from(answer: Answer) -> Self {
        Self {
            answer: answer.text,
            sources: answer
                .sources
                .into_iter()
                .map(|s| SourceResponse {
                    text: s.text,
                    position: s.position,
                    score: s.score,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
struct AskForm {
    file: Option<Document>,
    question: Option<String>,
    api_key: Option<String>,
}

struct Submission {
    document: Document,
    question: String,
    api_key: String,
}

impl AskForm {
    /// A form is ready once it carries a file, a non-blank question and a
    /// non-blank key. Otherwise the names of the missing fields are returned.
    fn into_submission(self) -> Result<Submission, Vec<&'static str>> {
        let question = self.question.filter(|q| !q.trim().is_empty());
        let api_key = self.api_key.filter(|k| !k.trim().is_empty());

        match (self.file, question, api_key) {
            (Some(document), Some(question), Some(api_key)) => Ok(Submission {
                document,
                question,
                api_key,
            }),
            (file, question, api_key) => {
                let mut missing = Vec::new();
                if file.is_none() {
                    missing.push(FILE_FIELD);
                }
                if question.is_none() {
                    missing.push(QUESTION_FIELD);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_FIELD);
                }
                Err(missing)
            }
        }
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<AskForm, (StatusCode, String)> {
    let mut form = AskForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (e.status(), format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            FILE_FIELD => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let media_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| (e.status(), format!("Failed to read file: {}", e)))?;

                tracing::debug!(
                    filename = %filename,
                    content_type = %media_type,
                    bytes = data.len(),
                    "File data received"
                );
                form.file = Some(Document::new(filename, media_type, data.to_vec()));
            }
            QUESTION_FIELD => {
                form.question = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| (e.status(), format!("Failed to read question: {}", e)))?,
                );
            }
            API_KEY_FIELD => {
                form.api_key = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| (e.status(), format!("Failed to read api key: {}", e)))?,
                );
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}

fn error_response(status: StatusCode, error: String, missing: Vec<&'static str>) -> Response {
    (status, Json(ErrorResponse { error, missing })).into_response()
}

fn status_for(error: &AnswerError) -> StatusCode {
    match error {
        AnswerError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AnswerError::InvalidCredentialFormat => StatusCode::BAD_REQUEST,
        AnswerError::Authentication(_) => StatusCode::UNAUTHORIZED,
        AnswerError::Service(_) => StatusCode::BAD_GATEWAY,
        AnswerError::Extraction(_) | AnswerError::EmptyDocument => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AnswerError::Chunking(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn ask_handler<F, T, I>(
    State(state): State<AppState<F, T, I>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    T: TextSplitter + ?Sized + 'static,
    I: VectorIndex + 'static,
{
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err((status, message)) => {
            tracing::warn!(error = %message, %status, "Malformed ask request");
            return error_response(status, message, Vec::new());
        }
    };

    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(missing) => {
            tracing::debug!(?missing, "Ask request not ready");
            return error_response(
                StatusCode::BAD_REQUEST,
                "A file, a question and an API key are required".to_string(),
                missing,
            );
        }
    };

    tracing::debug!(
        question = %sanitize_prompt(&submission.question),
        filename = %submission.document.filename,
        "Processing question"
    );

    // The gate guard moves into the task so it is held until the pipeline
    // finishes, even if the client goes away first.
    let permit = Arc::clone(&state.request_gate).lock_owned().await;
    let service = Arc::clone(&state.answer_service);
    let Submission {
        document,
        question,
        api_key,
    } = submission;

    let run = tokio::spawn(async move {
        let _permit = permit;
        service.answer(document, &question, api_key).await
    });

    match run.await {
        Ok(Ok(answer)) => {
            tracing::info!(sources_count = answer.sources.len(), "Question answered");
            (StatusCode::OK, Json(AskResponse::from(answer))).into_response()
        }
        Ok(Err(e)) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Answer pipeline failed");
            } else {
                tracing::warn!(error = %e, "Answer pipeline rejected request");
            }
            error_response(status, e.to_string(), Vec::new())
        }
        Err(e) => {
            tracing::error!(error = %e, "Answer task failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error while answering".to_string(),
                Vec::new(),
            )
        }
    }
}
