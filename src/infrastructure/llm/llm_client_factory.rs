use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::presentation::config::LlmSettings;

use super::{ExtractiveLlmClient, OpenAiClient};

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings, scaffold: bool) -> Arc<dyn LlmClient> {
        if scaffold {
            tracing::info!("Using offline extractive answer generator");
            return Arc::new(ExtractiveLlmClient);
        }

        tracing::info!(
            model = %settings.chat_model,
            base_url = %settings.base_url,
            "Using OpenAI chat completion model"
        );
        Arc::new(OpenAiClient::new(settings))
    }
}
