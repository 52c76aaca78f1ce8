use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, TextSplitter, VectorIndex};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{ask_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<F, T, I>(state: AppState<F, T, I>, max_upload_bytes: usize) -> Router
where
    F: FileLoader + ?Sized + 'static,
    T: TextSplitter + ?Sized + 'static,
    I: VectorIndex + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/ask",
            post(ask_handler::<F, T, I>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
