//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for answers printed by the `ask` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable answer with highlighted evidence (default)
    #[default]
    Pretty,
    /// The structured answer as JSON, exactly as the HTTP endpoint returns it
    Json,
}
