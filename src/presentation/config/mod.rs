mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ChunkingSettings, ENV_PREFIX, ENV_SEPARATOR, EmbeddingsSettings, LlmSettings,
    LoggingSettings, RetrievalSettings, ScaffoldSettings, ServerSettings, Settings,
};
