//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod providers;
mod retry;
mod server;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileProviderConfig, ProviderRole, ResolvedProvider};
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;

use scout_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP surface settings
    pub server: FileServerConfig,
    /// Search-augmented model (answer acquisition)
    pub search: FileProviderConfig,
    /// Verification model (accurate mode)
    pub verification: FileProviderConfig,
    /// Retry settings for the search call
    pub retry: FileRetryConfig,
    /// Output settings for the `ask` command
    pub output: FileOutputConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Resolve the `[search]` section against the process environment.
    pub fn search_provider(&self) -> ResolvedProvider {
        self.search.resolve_from_env(ProviderRole::Search)
    }

    /// Resolve the `[verification]` section against the process environment.
    pub fn verification_provider(&self) -> ResolvedProvider {
        self.verification.resolve_from_env(ProviderRole::Verification)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Uses the process environment for credential lookups.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.validate_with(|name| std::env::var(name).ok())
    }

    /// Validate with an explicit environment lookup.
    pub fn validate_with(&self, env: impl Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Providers
        issues.extend(self.search.resolve(ProviderRole::Search, &env).issues());
        issues.extend(
            self.verification
                .resolve(ProviderRole::Verification, &env)
                .issues(),
        );

        // 2. Retry bound
        if self.retry.max_retries == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "retry.max_retries".to_string(),
                    value: 0,
                },
                "retry.max_retries is 0; one attempt is still made",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{Model, OutputFormat};

    fn full_env(name: &str) -> Option<String> {
        match name {
            "KIMI_BASE_URL" | "OPENAI_BASE_URL" => Some("http://localhost/v1".to_string()),
            "KIMI_API_KEY" | "OPENAI_API_KEY" => Some("key".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:8080"

[search]
model = "kimi-search"
base_url = "https://kimi.example/v1"
bearer_token_env = "KIMI_TOKEN"

[verification]
model = "gpt-4o-mini"
timeout_secs = 60

[retry]
max_retries = 3
retry_delay_ms = 250

[output]
format = "json"

[logging]
conversation_log = "replies.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(
            config.search.base_url.as_deref(),
            Some("https://kimi.example/v1")
        );
        assert_eq!(config.search.bearer_token_env.as_deref(), Some("KIMI_TOKEN"));
        assert_eq!(config.verification.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.verification.timeout_secs, Some(60));
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.retry_delay_ms, 250);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some(std::path::Path::new("replies.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[retry]
max_retries = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.retry.max_retries, 5);
        // Defaults should apply
        assert_eq!(config.retry.retry_delay_ms, 1000);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.search.model.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_partial_provider_keeps_role_defaults() {
        let toml_str = r#"
[verification]
timeout_secs = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let resolved = config
            .verification
            .resolve(ProviderRole::Verification, full_env);
        assert_eq!(resolved.model, Model::Gemini20FlashExp);
        assert!(!resolved.web_search);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate_with(full_env).is_empty());
    }

    #[test]
    fn test_validate_reports_missing_urls_and_zero_retries() {
        let mut config = FileConfig::default();
        config.retry.max_retries = 0;

        let issues = config.validate_with(|_| None);
        let errors = issues.iter().filter(|i| i.is_error()).count();
        assert_eq!(errors, 2); // one missing base URL per provider
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, .. } if field == "retry.max_retries"
        )));
    }
}
