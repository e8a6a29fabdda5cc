//! Prompt domain
//!
//! System and user prompts for the search call and the verification call.

mod template;

pub use template::PromptTemplate;
