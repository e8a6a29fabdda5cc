//! Chat-completions session
//!
//! A session carries the system prompt and sends one user turn per call.
//! Nothing is remembered between calls.

use crate::openai::OpenAiProviderConfig;
use crate::openai::error::{OpenAiError, Result};
use crate::openai::protocol::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, error_message,
};
use async_trait::async_trait;
use scout_application::ports::llm_gateway::{GatewayError, LlmSession};
use scout_domain::Model;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct OpenAiSession {
    client: reqwest::Client,
    config: Arc<OpenAiProviderConfig>,
    model: Model,
    system_prompt: String,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        config: Arc<OpenAiProviderConfig>,
        model: Model,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            config,
            model,
            system_prompt,
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    async fn complete(&self, content: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(content),
            ],
            use_search: self.config.web_search,
        };

        debug!(model = %self.model, endpoint = %self.config.endpoint(), "Sending chat completion");

        let mut builder = self.client.post(self.config.endpoint()).json(&request);
        if let Some(token) = self.config.bearer() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(model = %self.model, status = status.as_u16(), "Chat completion rejected");
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| OpenAiError::ParseError {
                error: e.to_string(),
                raw: scout_domain::truncate(&body, 500),
            })?;

        let text = parsed.into_text().ok_or(OpenAiError::EmptyChoices)?;
        debug!(model = %self.model, bytes = text.len(), "Received chat completion");
        Ok(text)
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.complete(content).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::gateway::OpenAiGateway;
    use axum::Json;
    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use scout_application::LlmGateway;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::time::Duration;

    /// What the fake provider saw and what it answers with.
    #[derive(Clone)]
    struct FakeProvider {
        status: StatusCode,
        reply: Value,
        seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn chat_completions(
        State(fake): State<FakeProvider>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.seen.lock().unwrap().push((auth, body));
        (fake.status, Json(fake.reply.clone()))
    }

    /// Serve the fake on an ephemeral port and return its `/v1` base URL.
    async fn spawn_fake(fake: FakeProvider) -> String {
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(fake);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1", addr)
    }

    fn fake(status: StatusCode, reply: Value) -> FakeProvider {
        FakeProvider {
            status,
            reply,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn config(base_url: String) -> OpenAiProviderConfig {
        OpenAiProviderConfig::new(base_url).with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_send_returns_first_choice_and_sends_search_flag() {
        let provider = fake(
            StatusCode::OK,
            json!({"choices": [{"message": {"role": "assistant", "content": "{\"answer\":\"B\"}"}}]}),
        );
        let base = spawn_fake(provider.clone()).await;
        let gateway = OpenAiGateway::new(
            config(base)
                .with_api_key("key")
                .with_bearer_token("refresh")
                .with_web_search(true),
        )
        .unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::KimiSearch, "be brief")
            .await
            .unwrap();
        assert_eq!(session.model(), &Model::KimiSearch);

        let reply = session.send("Q1").await.unwrap();
        assert_eq!(reply, "{\"answer\":\"B\"}");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer refresh"));
        assert_eq!(body["model"], "kimi-search");
        assert_eq!(body["use_search"], true);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be brief");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Q1");
    }

    #[tokio::test]
    async fn test_verification_request_has_no_search_flag() {
        let provider = fake(
            StatusCode::OK,
            json!({"choices": [{"message": {"content": "ok"}}]}),
        );
        let base = spawn_fake(provider.clone()).await;
        let gateway = OpenAiGateway::new(config(base).with_api_key("sk")).unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::Gemini20FlashExp, "verify")
            .await
            .unwrap();
        session.send("Q").await.unwrap();

        let seen = provider.seen.lock().unwrap();
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk"));
        assert_eq!(body["model"], "gemini-2.0-flash-exp");
        assert!(body.get("use_search").is_none());
    }

    #[tokio::test]
    async fn test_error_status_maps_to_gateway_error() {
        let provider = fake(
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "invalid key"}}),
        );
        let base = spawn_fake(provider).await;
        let gateway = OpenAiGateway::new(config(base)).unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::KimiSearch, "")
            .await
            .unwrap();
        match session.send("Q").await {
            Err(GatewayError::Unauthorized(msg)) => assert_eq!(msg, "invalid key"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_empty_response() {
        let provider = fake(StatusCode::OK, json!({"choices": []}));
        let base = spawn_fake(provider).await;
        let gateway = OpenAiGateway::new(config(base)).unwrap();

        let session = gateway
            .create_session_with_system_prompt(&Model::KimiSearch, "")
            .await
            .unwrap();
        assert!(matches!(
            session.send("Q").await,
            Err(GatewayError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiGateway::new(config(format!("http://{}/v1", addr))).unwrap();
        let session = gateway
            .create_session_with_system_prompt(&Model::KimiSearch, "")
            .await
            .unwrap();
        assert!(matches!(
            session.send("Q").await,
            Err(GatewayError::ConnectionError(_))
        ));
    }
}
