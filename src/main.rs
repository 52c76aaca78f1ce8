use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use askdoc::application::services::{AnswerService, RetrievalOptions};
use askdoc::infrastructure::llm::{EmbedderFactory, LlmClientFactory};
use askdoc::infrastructure::observability::{TracingConfig, init_tracing};
use askdoc::infrastructure::text_processing::{CharacterTextSplitter, CompositeFileLoader};
use askdoc::infrastructure::vector_index::InMemoryVectorIndex;
use askdoc::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(environment, &settings.logging),
        settings.server.port,
    );

    let scaffold = settings.scaffold.enabled;
    if scaffold {
        tracing::warn!("Scaffold mode enabled: answers come from offline providers");
    }

    let file_loader = Arc::new(CompositeFileLoader::default());
    let text_splitter = Arc::new(CharacterTextSplitter::new(
        settings.chunking.chunk_size,
        settings.chunking.chunk_overlap,
    ));
    let embedder = EmbedderFactory::create(&settings.embeddings, scaffold);
    let llm_client = LlmClientFactory::create(&settings.llm, scaffold);

    let answer_service = Arc::new(AnswerService::<_, _, InMemoryVectorIndex>::new(
        file_loader,
        text_splitter,
        embedder,
        llm_client,
        RetrievalOptions {
            top_k: settings.retrieval.top_k,
            distance_metric: settings.retrieval.distance_metric,
        },
    ));

    let router = create_router(AppState::new(answer_service), settings.max_upload_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(
        %addr,
        chunk_size = settings.chunking.chunk_size,
        chunk_overlap = settings.chunking.chunk_overlap,
        top_k = settings.retrieval.top_k,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
