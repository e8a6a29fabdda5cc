//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`RetryPolicy`]: attempt bound and delay for the search call
//! - [`ModelConfig`]: which model serves each role

pub mod model_config;
pub mod retry_policy;

pub use model_config::ModelConfig;
pub use retry_policy::RetryPolicy;
