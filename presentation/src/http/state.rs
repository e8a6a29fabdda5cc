//! Shared application state for the HTTP server

use scout_application::AnswerQuestionUseCase;
use std::sync::Arc;

/// Immutable state shared by every request
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<AnswerQuestionUseCase>,
}

impl AppState {
    pub fn new(use_case: AnswerQuestionUseCase) -> Self {
        Self {
            use_case: Arc::new(use_case),
        }
    }

    pub fn use_case(&self) -> &AnswerQuestionUseCase {
        &self.use_case
    }
}
