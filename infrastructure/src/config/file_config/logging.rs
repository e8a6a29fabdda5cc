//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving every raw model reply (disabled when unset)
    pub conversation_log: Option<PathBuf>,
    /// Directory for daily-rolling server logs (disabled when unset)
    pub log_dir: Option<PathBuf>,
}
