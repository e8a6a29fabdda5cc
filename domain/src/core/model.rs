//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models used by the answer pipeline (Value Object)
///
/// Only the two defaults are named; any other identifier the provider
/// understands is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Search-augmented model that answers the question
    KimiSearch,
    /// Model that verifies a candidate answer in accurate mode
    Gemini20FlashExp,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::KimiSearch => "kimi-search",
            Model::Gemini20FlashExp => "gemini-2.0-flash-exp",
            Model::Custom(s) => s,
        }
    }

    /// Default model for answer acquisition
    pub fn default_search() -> Model {
        Model::KimiSearch
    }

    /// Default model for the verification pass
    pub fn default_verification() -> Model {
        Model::Gemini20FlashExp
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "kimi-search" => Model::KimiSearch,
            "gemini-2.0-flash-exp" => Model::Gemini20FlashExp,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::default_search(), Model::default_verification()] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "moonshot-v1-8k".parse().unwrap();
        assert_eq!(model, Model::Custom("moonshot-v1-8k".to_string()));
        assert_eq!(model.to_string(), "moonshot-v1-8k");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Model::KimiSearch).unwrap();
        assert_eq!(json, r#""kimi-search""#);
        let back: Model = serde_json::from_str(r#""gemini-2.0-flash-exp""#).unwrap();
        assert_eq!(back, Model::Gemini20FlashExp);
    }
}
