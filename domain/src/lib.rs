//! Domain layer for quiz-scout
//!
//! This crate contains the core entities, value objects and the pure text
//! handling that turns free-form model output into a structured answer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: the full quiz text pasted by the user
//! - **SearchMode**: `fast` (first parsed answer) or `accurate` (plus a
//!   verification pass by a second model)
//! - **StructuredAnswer**: the `{answer, supporting_text, source}` shape both
//!   model prompts demand
//! - **Extraction**: best-effort location of a JSON object inside prose

pub mod answer;
pub mod config;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use answer::{
    extraction::{extract_json_object, strip_citation_markers},
    mode::SearchMode,
    structured::StructuredAnswer,
};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{error::DomainError, model::Model, question::Question, string::truncate};
pub use prompt::PromptTemplate;
