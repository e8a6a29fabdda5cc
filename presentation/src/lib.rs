//! Presentation layer for quiz-scout
//!
//! This crate contains the HTTP surface (JSON API and server-rendered
//! page), CLI definitions, output formatters and progress reporters.

pub mod cli;
pub mod http;
pub mod markup;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ModeArg, OutputArg};
pub use http::{ApiError, AppState, router};
pub use markup::{escape_html, render_markup, render_terminal};
pub use output::console::ConsoleFormatter;
pub use progress::{
    reporter::{ProgressReporter, SimpleProgress},
    timer::ElapsedTimer,
};
pub use web::{PageOutcome, SearchPage};
