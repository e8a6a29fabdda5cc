//! Error types for the OpenAI-compatible adapter

use scout_application::GatewayError;
use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no message content")]
    EmptyChoices,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            OpenAiError::Transport(e) => GatewayError::RequestFailed(e.to_string()),
            OpenAiError::Status { status, message } => match status {
                401 | 403 => GatewayError::Unauthorized(message),
                404 => GatewayError::ModelNotAvailable(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, message)),
            },
            err @ OpenAiError::ParseError { .. } => GatewayError::RequestFailed(err.to_string()),
            OpenAiError::EmptyChoices => GatewayError::EmptyResponse,
        }
    }
}
