//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use scout_domain::{OutputFormat, SearchMode};
use std::path::PathBuf;

/// Answering strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// First parsed answer from the search model
    Fast,
    /// Search answer checked by a second model
    Accurate,
}

impl From<ModeArg> for SearchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Fast => SearchMode::Fast,
            ModeArg::Accurate => SearchMode::Accurate,
        }
    }
}

/// Output format for the `ask` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Formatted answer panel
    Pretty,
    /// JSON document
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Pretty => OutputFormat::Pretty,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for quiz-scout
#[derive(Parser, Debug)]
#[command(name = "quiz-scout")]
#[command(author, version, about = "Answer quiz questions with a search-augmented model")]
#[command(long_about = r#"
quiz-scout asks a web-searching model for a structured answer to a quiz
question: the answer, a supporting excerpt and its source.

Modes:
  fast      Take the first answer the search model gives
  accurate  Have a second model check that answer before returning it

Configuration files are loaded from (in priority order):
1. QUIZ_SCOUT_* environment variables
2. --config <path>             Explicit config file
3. ./quiz-scout.toml           Project-level config
4. ~/.config/quiz-scout/config.toml   Global config

Example:
  quiz-scout serve --bind 0.0.0.0:3000
  quiz-scout ask "Which planet has the most moons?"
  quiz-scout ask --mode accurate --output json "Who wrote Dream of the Red Chamber?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (JSON API and web page)
    Serve {
        /// Socket address to bind, overrides `[server] bind`
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Also write daily-rolling logs to this directory
        #[arg(long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Answer one question and print the result
    Ask {
        /// The full question text
        question: String,

        /// Answering strategy
        #[arg(short, long, value_enum, default_value = "fast")]
        mode: ModeArg,

        /// Output format, overrides `[output] format`
        #[arg(short, long, value_enum)]
        output: Option<OutputArg>,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },
}
