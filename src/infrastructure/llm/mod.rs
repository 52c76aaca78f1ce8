pub mod embedder;
mod extractive_llm_client;
mod llm_client_factory;
mod openai_client;
mod prompt_template;

pub use embedder::{EmbedderFactory, HashingEmbedder, OpenAiEmbedder};
pub use extractive_llm_client::{ExtractiveLlmClient, NO_ANSWER};
pub use llm_client_factory::LlmClientFactory;
pub use openai_client::OpenAiClient;
pub use prompt_template::{DEFAULT_PROMPT_TEMPLATE, render_prompt};
