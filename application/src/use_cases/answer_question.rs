//! Answer Question use case.
//!
//! Takes a quiz question to a structured answer:
//!
//! 1. **Acquire**: ask the search-augmented model, which replies in prose
//!    with a JSON object embedded somewhere in it
//! 2. **Extract**: locate that object with the extraction heuristic
//! 3. **Retry**: repeat 1-2 up to [`RetryPolicy::max_attempts`] with a fixed
//!    delay, stopping at the first reply that contains an object
//! 4. **Verify** (accurate mode): send the candidate to a second model once
//!    and extract again from its reply
//!
//! Only the search call is retried. The verification pass is a single attempt.

use crate::config::{ModelConfig, RetryPolicy};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoSearchProgress, SearchProgress};
use crate::ports::sleeper::{Sleeper, TokioSleeper};
use scout_domain::{
    DomainError, PromptTemplate, Question, SearchMode, StructuredAnswer, extract_json_object,
    truncate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while answering a question
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    /// Every attempt ended in a failed model call (the last one did).
    #[error("Failed to get an answer after multiple attempts")]
    ExhaustedAfterCallErrors {
        attempts: usize,
        #[source]
        last_error: GatewayError,
    },

    /// The last attempt returned text without a JSON object.
    #[error("Could not get a valid answer, please try again later")]
    ExhaustedAfterEmptyExtraction { attempts: usize },

    #[error("Verification model request failed: {0}")]
    VerificationFailed(#[source] GatewayError),

    #[error("Verification model returned no structured answer")]
    VerificationEmpty,

    #[error(transparent)]
    MalformedAnswer(#[from] DomainError),
}

impl AnswerQuestionError {
    /// Whether the retry bound was reached without an answer
    pub fn is_retry_exhausted(&self) -> bool {
        matches!(
            self,
            AnswerQuestionError::ExhaustedAfterCallErrors { .. }
                | AnswerQuestionError::ExhaustedAfterEmptyExtraction { .. }
        )
    }
}

/// Input for the [`AnswerQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    pub question: Question,
    pub mode: SearchMode,
}

impl AnswerQuestionInput {
    pub fn new(question: Question, mode: SearchMode) -> Self {
        Self { question, mode }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerQuestionOutput {
    pub answer: StructuredAnswer,
    /// Search attempts used (1-based count).
    pub attempts: usize,
    /// Whether the verification pass produced the answer.
    pub verified: bool,
}

/// Outcome of the last failed search attempt.
enum AttemptFailure {
    Call(GatewayError),
    EmptyExtraction,
}

/// Use case for answering a quiz question.
///
/// Holds no per-request state; one instance serves all requests. Every
/// request opens its own model sessions.
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    search_gateway: Arc<dyn LlmGateway>,
    verification_gateway: Arc<dyn LlmGateway>,
    models: ModelConfig,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnswerQuestionUseCase {
    pub fn new(
        search_gateway: Arc<dyn LlmGateway>,
        verification_gateway: Arc<dyn LlmGateway>,
    ) -> Self {
        Self {
            search_gateway,
            verification_gateway,
            models: ModelConfig::default(),
            retry: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_models(mut self, models: ModelConfig) -> Self {
        self.models = models;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: AnswerQuestionInput,
    ) -> Result<AnswerQuestionOutput, AnswerQuestionError> {
        self.execute_with_progress(input, &NoSearchProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn SearchProgress,
    ) -> Result<AnswerQuestionOutput, AnswerQuestionError> {
        info!(
            mode = %input.mode,
            "Answering question: {}",
            truncate(input.question.content(), 100)
        );

        let result = self.run(&input, progress).await;

        match &result {
            Ok(output) => info!(
                attempts = output.attempts,
                verified = output.verified,
                "Answer ready: {}",
                truncate(&output.answer.answer, 100)
            ),
            Err(e) => warn!("Answering failed: {}", e),
        }
        progress.on_complete(result.is_ok());

        result
    }

    async fn run(
        &self,
        input: &AnswerQuestionInput,
        progress: &dyn SearchProgress,
    ) -> Result<AnswerQuestionOutput, AnswerQuestionError> {
        let (candidate, attempts) = self.acquire_with_retry(&input.question, progress).await?;

        if !input.mode.verifies() {
            return Ok(AnswerQuestionOutput {
                answer: StructuredAnswer::from_json(&candidate)?,
                attempts,
                verified: false,
            });
        }

        progress.on_verification_start();
        let verified = self.verify(&input.question, &candidate).await?;

        Ok(AnswerQuestionOutput {
            answer: StructuredAnswer::from_json(&verified)?,
            attempts,
            verified: true,
        })
    }

    /// Retry controller: search + extract until an object is found.
    ///
    /// Returns the extracted JSON text and the number of attempts used.
    async fn acquire_with_retry(
        &self,
        question: &Question,
        progress: &dyn SearchProgress,
    ) -> Result<(String, usize), AnswerQuestionError> {
        let max_attempts = self.retry.max_attempts();
        let mut last_failure = AttemptFailure::EmptyExtraction;

        for attempt in 1..=max_attempts {
            progress.on_attempt_start(attempt, max_attempts);
            debug!("Search attempt {}/{}", attempt, max_attempts);

            match self.acquire(question).await {
                Ok(raw) => {
                    debug!("Raw search reply: {}", truncate(&raw, 500));
                    self.conversation_logger.log(ConversationEvent::new(
                        "search_reply",
                        serde_json::json!({
                            "model": self.models.search.to_string(),
                            "attempt": attempt,
                            "text": raw,
                        }),
                    ));

                    if let Some(json) = extract_json_object(&raw) {
                        return Ok((json, attempt));
                    }

                    warn!(
                        "Attempt {}/{}: no JSON object in search reply",
                        attempt, max_attempts
                    );
                    self.conversation_logger.log(ConversationEvent::new(
                        "extraction_miss",
                        serde_json::json!({ "attempt": attempt }),
                    ));
                    progress.on_attempt_failed(attempt, "no structured answer in reply");
                    last_failure = AttemptFailure::EmptyExtraction;
                }
                Err(e) => {
                    warn!("Attempt {}/{}: search call failed: {}", attempt, max_attempts, e);
                    self.conversation_logger.log(ConversationEvent::new(
                        "search_error",
                        serde_json::json!({
                            "attempt": attempt,
                            "error": e.to_string(),
                        }),
                    ));
                    progress.on_attempt_failed(attempt, &e.to_string());
                    last_failure = AttemptFailure::Call(e);
                }
            }

            if attempt < max_attempts {
                self.sleeper.sleep(self.retry.retry_delay).await;
            }
        }

        Err(match last_failure {
            AttemptFailure::Call(last_error) => AnswerQuestionError::ExhaustedAfterCallErrors {
                attempts: max_attempts,
                last_error,
            },
            AttemptFailure::EmptyExtraction => AnswerQuestionError::ExhaustedAfterEmptyExtraction {
                attempts: max_attempts,
            },
        })
    }

    /// Answer acquisition: one call to the search model.
    async fn acquire(&self, question: &Question) -> Result<String, GatewayError> {
        let session = self
            .search_gateway
            .create_session_with_system_prompt(&self.models.search, PromptTemplate::search_system())
            .await?;
        session.send(question.content()).await
    }

    /// Verification pass: one call to the verification model, no retry.
    async fn verify(
        &self,
        question: &Question,
        candidate: &str,
    ) -> Result<String, AnswerQuestionError> {
        info!("Verifying candidate with {}", self.models.verification);

        let session = self
            .verification_gateway
            .create_session_with_system_prompt(
                &self.models.verification,
                PromptTemplate::verification_system(),
            )
            .await
            .map_err(AnswerQuestionError::VerificationFailed)?;

        let raw = session
            .send(&PromptTemplate::verification_prompt(
                question.content(),
                candidate,
            ))
            .await
            .map_err(AnswerQuestionError::VerificationFailed)?;

        debug!("Raw verification reply: {}", truncate(&raw, 500));
        self.conversation_logger.log(ConversationEvent::new(
            "verification_reply",
            serde_json::json!({
                "model": self.models.verification.to_string(),
                "text": raw,
            }),
        ));

        extract_json_object(&raw).ok_or(AnswerQuestionError::VerificationEmpty)
    }
}
