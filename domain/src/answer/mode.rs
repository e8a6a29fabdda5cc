//! Search mode definitions.
//!
//! [`SearchMode`] is the single user-facing choice per request:
//! - Fast: return the first answer the search model produces
//! - Accurate: additionally ask a second model to verify it

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much work to spend on a question.
///
/// # Fast vs Accurate
///
/// - **Fast** (default): one search call (plus retries), answer returned as
///   soon as it parses. The answer may occasionally disagree with its own
///   supporting text.
/// - **Accurate**: the candidate answer is re-checked by a verification
///   model that must quote the evidence. Slower and more expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Fast,
    Accurate,
}

impl SearchMode {
    /// Whether this mode runs the verification pass
    pub fn verifies(&self) -> bool {
        matches!(self, SearchMode::Accurate)
    }

    /// Get a short description for display
    pub fn short_description(&self) -> &'static str {
        match self {
            SearchMode::Fast => "Fast mode",
            SearchMode::Accurate => "Accurate mode",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Fast => write!(f, "fast"),
            SearchMode::Accurate => write!(f, "accurate"),
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "f" => Ok(SearchMode::Fast),
            "accurate" | "a" => Ok(SearchMode::Accurate),
            _ => Err(DomainError::InvalidMode(s.to_string())),
        }
    }
}
