//! OpenAI-compatible LLM Gateway implementation

use crate::openai::OpenAiProviderConfig;
use crate::openai::session::OpenAiSession;
use async_trait::async_trait;
use scout_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use scout_domain::Model;
use std::sync::Arc;
use tracing::info;

/// LLM Gateway for any endpoint speaking the chat-completions protocol
///
/// One `reqwest::Client` is shared by every session the gateway creates.
pub struct OpenAiGateway {
    client: reqwest::Client,
    config: Arc<OpenAiProviderConfig>,
}

impl OpenAiGateway {
    /// Build the HTTP client for the given endpoint.
    pub fn new(config: OpenAiProviderConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            web_search = config.web_search,
            "OpenAiGateway initialized"
        );

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &OpenAiProviderConfig {
        &self.config
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let session = OpenAiSession::new(
            self.client.clone(),
            Arc::clone(&self.config),
            model.clone(),
            system_prompt.to_string(),
        );

        Ok(Box::new(session))
    }
}
