use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::ports::DistanceMetric;
use crate::application::services::DEFAULT_TOP_K;
use crate::infrastructure::llm::DEFAULT_PROMPT_TEMPLATE;
use crate::infrastructure::llm::embedder::{DEFAULT_HASHING_DIMENSIONS, OPENAI_BASE_URL};
use crate::infrastructure::text_processing::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalSettings,
    pub embeddings: EmbeddingsSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalSettings {
    pub top_k: usize,
    pub distance_metric: DistanceMetric,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsSettings {
    pub base_url: String,
    pub model: String,
    pub scaffold_dimensions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub prompt_template: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

/// Scaffold mode swaps the hosted providers for the offline hashing embedder
/// and extractive answerer.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaffoldSettings {
    pub enabled: bool,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{environment}` if present, then
    /// `APP_*` environment variables (`__` separates nested keys).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str());
        Self::load_from(Some(&file_name))
    }

    pub fn load_from(file_name: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?;

        if let Some(file_name) = file_name {
            builder = builder.add_source(File::with_name(file_name).required(false));
        }

        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_upload_size_mb", 25_i64)?
            .set_default("chunking.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
            .set_default("chunking.chunk_overlap", DEFAULT_CHUNK_OVERLAP as i64)?
            .set_default("retrieval.top_k", DEFAULT_TOP_K as i64)?
            .set_default("retrieval.distance_metric", "cosine")?
            .set_default("embeddings.base_url", OPENAI_BASE_URL)?
            .set_default("embeddings.model", "text-embedding-3-small")?
            .set_default(
                "embeddings.scaffold_dimensions",
                DEFAULT_HASHING_DIMENSIONS as i64,
            )?
            .set_default("llm.base_url", OPENAI_BASE_URL)?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 512_i64)?
            .set_default("llm.temperature", 0.7)?
            .set_default("llm.prompt_template", DEFAULT_PROMPT_TEMPLATE)?
            .set_default("logging.level", "info,askdoc=debug,tower_http=debug")?
            .set_default("logging.json_format", false)?
            .set_default("scaffold.enabled", false)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_upload_size_mb == 0 {
            return Err(ConfigError::Message(
                "server.max_upload_size_mb must be greater than zero".to_string(),
            ));
        }
        if self.server.max_upload_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            return Err(ConfigError::Message(format!(
                "server.max_upload_size_mb ({}) is too large",
                self.server.max_upload_size_mb
            )));
        }
        if self.chunking.chunk_size == 0 {
            return Err(ConfigError::Message(
                "chunking.chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(ConfigError::Message(format!(
                "chunking.chunk_overlap ({}) must be smaller than chunking.chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::Message(
                "retrieval.top_k must be greater than zero".to_string(),
            ));
        }
        for placeholder in ["{context}", "{question}"] {
            if !self.llm.prompt_template.contains(placeholder) {
                return Err(ConfigError::Message(format!(
                    "llm.prompt_template must contain {placeholder}"
                )));
            }
        }
        Ok(())
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_size_mb.saturating_mul(BYTES_PER_MB)
    }
}
