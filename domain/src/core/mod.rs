//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: model identifiers for the search and verification calls
//! - [`question::Question`]: a validated question to answer
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
pub mod string;
