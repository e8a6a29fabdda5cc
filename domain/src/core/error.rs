//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid search mode: {0}")]
    InvalidMode(String),

    #[error("Model returned a malformed answer: {0}")]
    MalformedAnswer(String),
}

impl DomainError {
    /// Check if this error came from parsing model output
    pub fn is_malformed_answer(&self) -> bool {
        matches!(self, DomainError::MalformedAnswer(_))
    }
}
