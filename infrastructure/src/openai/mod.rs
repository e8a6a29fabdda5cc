//! OpenAI-compatible chat-completions adapter
//!
//! Implements `LlmGateway` over `POST {base_url}/chat/completions`. Both the
//! search model and the verification model are reached this way; they
//! differ only in [`OpenAiProviderConfig`].

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

use std::time::Duration;

/// Connection settings for one OpenAI-compatible endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiProviderConfig {
    /// Base URL including the API version path, e.g. `https://host/v1`.
    pub base_url: String,
    pub api_key: Option<String>,
    /// Replaces the API key in the `Authorization` header when set.
    pub bearer_token: Option<String>,
    /// Send `use_search: true` with every request.
    pub web_search: bool,
    pub timeout: Duration,
}

impl OpenAiProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            bearer_token: None,
            web_search: false,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full chat-completions endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Credential for the `Authorization: Bearer` header.
    pub fn bearer(&self) -> Option<&str> {
        self.bearer_token.as_deref().or(self.api_key.as_deref())
    }
}
