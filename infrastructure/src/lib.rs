//! Infrastructure layer for quiz-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileRetryConfig, FileServerConfig, ProviderRole, ResolvedProvider,
};
pub use logging::JsonlConversationLogger;
pub use openai::{
    OpenAiProviderConfig,
    error::{OpenAiError, Result},
    gateway::OpenAiGateway,
    session::OpenAiSession,
};
