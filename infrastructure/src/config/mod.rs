//! Configuration file loading for quiz-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_SCOUT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz-scout.toml` or `./.quiz-scout.toml`
//! 4. Global: `$XDG_CONFIG_HOME/quiz-scout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig, FileRetryConfig,
    FileServerConfig, ProviderRole, ResolvedProvider,
};
pub use loader::ConfigLoader;
