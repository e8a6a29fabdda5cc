//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A quiz question to be answered (Value Object)
///
/// The content is opaque: the question type, stem and options are all part of
/// one pasted text block. The only check is that something was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::InvalidQuestion(
                "question cannot be empty".to_string(),
            ))
        } else {
            Ok(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("Which option is correct? A. x B. y").unwrap();
        assert_eq!(q.content(), "Which option is correct? A. x B. y");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_err());
        assert!(Question::try_new("   \n").is_err());
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let q = Question::try_new("  Q1  ").unwrap();
        assert_eq!(q.into_content(), "  Q1  ");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let ok: Result<Question, _> = serde_json::from_str(r#""Q1""#);
        assert_eq!(ok.unwrap().content(), "Q1");

        let blank: Result<Question, _> = serde_json::from_str(r#""  ""#);
        assert!(blank.is_err());
    }
}
