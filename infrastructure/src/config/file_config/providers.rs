//! Provider configuration from TOML (`[search]` and `[verification]` sections)
//!
//! Both sections share one shape. Every field is optional; what is left
//! unset falls back to the defaults of the section's [`ProviderRole`], so
//! an empty config still picks up the conventional environment variables.

use crate::openai::OpenAiProviderConfig;
use scout_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout for model calls, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Which pipeline role a provider section configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRole {
    Search,
    Verification,
}

impl ProviderRole {
    /// TOML section name
    pub fn section(&self) -> &'static str {
        match self {
            ProviderRole::Search => "search",
            ProviderRole::Verification => "verification",
        }
    }

    fn default_model(&self) -> Model {
        match self {
            ProviderRole::Search => Model::default_search(),
            ProviderRole::Verification => Model::default_verification(),
        }
    }

    fn default_base_url_env(&self) -> &'static str {
        match self {
            ProviderRole::Search => "KIMI_BASE_URL",
            ProviderRole::Verification => "OPENAI_BASE_URL",
        }
    }

    fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderRole::Search => "KIMI_API_KEY",
            ProviderRole::Verification => "OPENAI_API_KEY",
        }
    }

    fn default_bearer_token_env(&self) -> Option<&'static str> {
        match self {
            ProviderRole::Search => Some("KIMI_REFRESH_TOKEN"),
            ProviderRole::Verification => None,
        }
    }

    fn default_web_search(&self) -> bool {
        matches!(self, ProviderRole::Search)
    }
}

/// Raw provider settings for one OpenAI-compatible endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Model identifier sent in the request body.
    pub model: Option<String>,
    /// Base URL, e.g. `https://api.example.com/v1`. Wins over `base_url_env`.
    pub base_url: Option<String>,
    /// Environment variable holding the base URL.
    pub base_url_env: Option<String>,
    /// Direct API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: Option<String>,
    /// Direct bearer token; replaces the API key in `Authorization` when set.
    pub bearer_token: Option<String>,
    /// Environment variable holding the bearer token.
    pub bearer_token_env: Option<String>,
    /// Ask the provider to search the web before answering.
    pub web_search: Option<bool>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Provider settings after role defaults and environment lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub role: ProviderRole,
    pub model: Model,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
    pub web_search: bool,
    pub timeout: Duration,
}

impl FileProviderConfig {
    /// Resolve against the role's defaults using `env` for variable lookups.
    ///
    /// Literal values win over environment variables. Empty strings count
    /// as unset.
    pub fn resolve(
        &self,
        role: ProviderRole,
        env: impl Fn(&str) -> Option<String>,
    ) -> ResolvedProvider {
        let lookup = |literal: &Option<String>, var: Option<&str>| -> Option<String> {
            non_empty(literal.clone()).or_else(|| var.and_then(|v| non_empty(env(v))))
        };

        let base_url_env = self
            .base_url_env
            .as_deref()
            .unwrap_or(role.default_base_url_env());
        let api_key_env = self
            .api_key_env
            .as_deref()
            .unwrap_or(role.default_api_key_env());
        let bearer_token_env = self
            .bearer_token_env
            .as_deref()
            .or(role.default_bearer_token_env());

        ResolvedProvider {
            role,
            model: self
                .model
                .as_deref()
                .map(Model::from)
                .unwrap_or_else(|| role.default_model()),
            base_url: lookup(&self.base_url, Some(base_url_env)),
            api_key: lookup(&self.api_key, Some(api_key_env)),
            bearer_token: lookup(&self.bearer_token, bearer_token_env),
            web_search: self.web_search.unwrap_or(role.default_web_search()),
            timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Resolve using the process environment.
    pub fn resolve_from_env(&self, role: ProviderRole) -> ResolvedProvider {
        self.resolve(role, |name| std::env::var(name).ok())
    }
}

impl ResolvedProvider {
    /// Detect unusable or suspicious settings.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let section = self.role.section().to_string();
        let mut issues = Vec::new();

        if self.model.as_str().trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModel {
                    section: section.clone(),
                },
                format!("[{}] model name cannot be empty", section),
            ));
        }

        if self.base_url.is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingBaseUrl {
                    section: section.clone(),
                },
                format!(
                    "[{}] no base URL: set `base_url` or the `{}` environment variable",
                    section,
                    self.role.default_base_url_env()
                ),
            ));
        }

        if self.api_key.is_none() && self.bearer_token.is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingCredential {
                    section: section.clone(),
                },
                format!(
                    "[{}] no API key or bearer token; requests are sent unauthenticated",
                    section
                ),
            ));
        }

        if self.timeout.is_zero() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: format!("{}.timeout_secs", section),
                    value: 0,
                },
                format!("[{}] timeout_secs cannot be 0", section),
            ));
        }

        issues
    }

    /// Build the HTTP adapter settings; `None` without a base URL.
    pub fn to_openai_config(&self) -> Option<OpenAiProviderConfig> {
        Some(OpenAiProviderConfig {
            base_url: self.base_url.clone()?,
            api_key: self.api_key.clone(),
            bearer_token: self.bearer_token.clone(),
            web_search: self.web_search,
            timeout: self.timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
