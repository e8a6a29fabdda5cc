//! Structured answer value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The three-field answer both model prompts demand.
///
/// `supporting_text` carries `**...**` emphasis around the answer span and
/// `source` is a `[label](url)` link. All three fields are required; the
/// presentation layer assumes exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAnswer {
    pub answer: String,
    pub supporting_text: String,
    pub source: String,
}

impl StructuredAnswer {
    pub fn new(
        answer: impl Into<String>,
        supporting_text: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            supporting_text: supporting_text.into(),
            source: source.into(),
        }
    }

    /// Parse a JSON object located by the extraction heuristic.
    ///
    /// Fails with [`DomainError::MalformedAnswer`] when the text is not
    /// valid JSON or any of the three fields is missing or not a string.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::MalformedAnswer(e.to_string()))
    }
}
