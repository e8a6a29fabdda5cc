//! HTTP error responses
//!
//! Every failure leaves the server as `{ "error": message }`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scout_application::AnswerQuestionError;
use scout_domain::DomainError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparseable body, blank question or unknown mode
    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Pipeline failure; the message is shown to the user as-is
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AnswerQuestionError> for ApiError {
    fn from(err: AnswerQuestionError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_malformed_answer() {
            ApiError::Internal(err.to_string())
        } else {
            ApiError::BadRequest(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_application::GatewayError;

    #[test]
    fn test_exhaustion_messages_are_internal() {
        let err: ApiError = AnswerQuestionError::ExhaustedAfterCallErrors {
            attempts: 2,
            last_error: GatewayError::Timeout,
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to get an answer after multiple attempts"
        );

        let err: ApiError = AnswerQuestionError::ExhaustedAfterEmptyExtraction { attempts: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Could not get a valid answer, please try again later"
        );
    }

    #[test]
    fn test_domain_errors() {
        let err: ApiError = DomainError::InvalidQuestion("empty".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = DomainError::MalformedAnswer("eof".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Model returned a malformed answer: eof");
    }

    #[test]
    fn test_method_not_allowed_message() {
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
