//! Role-based model selection.

use scout_domain::Model;

/// Which model serves each role in the answer pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Search-augmented model that produces the candidate answer.
    pub search: Model,
    /// Model that verifies the candidate in accurate mode.
    pub verification: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            search: Model::default_search(),
            verification: Model::default_verification(),
        }
    }
}

impl ModelConfig {
    pub fn with_search(mut self, model: Model) -> Self {
        self.search = model;
        self
    }

    pub fn with_verification(mut self, model: Model) -> Self {
        self.verification = model;
        self
    }
}
