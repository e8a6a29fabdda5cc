//! Console output formatter for answers

use crate::markup::render_terminal;
use crate::progress::timer::format_elapsed;
use colored::Colorize;
use scout_application::AnswerQuestionOutput;
use scout_domain::{OutputFormat, SearchMode, StructuredAnswer};
use serde::Serialize;
use std::time::Duration;

/// Formats answers for the `ask` command
pub struct ConsoleFormatter {
    color: bool,
}

/// JSON document printed by `ask --output json`
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    answer: &'a StructuredAnswer,
    mode: SearchMode,
    attempts: usize,
    verified: bool,
    elapsed_ms: u64,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(
        &self,
        format: OutputFormat,
        output: &AnswerQuestionOutput,
        mode: SearchMode,
        elapsed: Duration,
    ) -> String {
        match format {
            OutputFormat::Pretty => self.format_pretty(output, mode, elapsed),
            OutputFormat::Json => Self::format_json(output, mode, elapsed),
        }
    }

    /// Human-readable answer panel
    pub fn format_pretty(
        &self,
        output: &AnswerQuestionOutput,
        mode: SearchMode,
        elapsed: Duration,
    ) -> String {
        let answer = &output.answer;
        let mut text = String::new();

        text.push_str(&self.heading("Answer"));
        text.push_str(&format!("{}\n\n", self.field(&answer.answer)));
        text.push_str(&self.heading("Supporting text"));
        text.push_str(&format!("{}\n\n", self.field(&answer.supporting_text)));
        text.push_str(&self.heading("Source"));
        text.push_str(&format!("{}\n\n", self.field(&answer.source)));

        let footer = format!(
            "{} mode, {} attempt{}{}, {}",
            mode,
            output.attempts,
            if output.attempts == 1 { "" } else { "s" },
            if output.verified { ", verified" } else { "" },
            format_elapsed(elapsed)
        );
        if self.color {
            text.push_str(&footer.as_str().dimmed().to_string());
        } else {
            text.push_str(&footer);
        }
        text.push('\n');
        text
    }

    pub fn format_json(output: &AnswerQuestionOutput, mode: SearchMode, elapsed: Duration) -> String {
        let report = JsonReport {
            answer: &output.answer,
            mode,
            attempts: output.attempts,
            verified: output.verified,
            elapsed_ms: elapsed.as_millis() as u64,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Error line for a failed request
    pub fn format_error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "Error:".red().bold(), message)
        } else {
            format!("Error: {}", message)
        }
    }

    fn heading(&self, title: &str) -> String {
        if self.color {
            format!("{}\n", title.cyan().bold())
        } else {
            format!("{}\n", title)
        }
    }

    fn field(&self, text: &str) -> String {
        render_terminal(text, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(attempts: usize, verified: bool) -> AnswerQuestionOutput {
        AnswerQuestionOutput {
            answer: StructuredAnswer::new("B", "**B** is correct", "[doc](http://x)"),
            attempts,
            verified,
        }
    }

    #[test]
    fn test_pretty_without_color() {
        let text = ConsoleFormatter::new(false).format(
            OutputFormat::Pretty,
            &output(1, false),
            SearchMode::Fast,
            Duration::from_millis(2_340),
        );

        assert_eq!(
            text,
            "Answer\nB\n\nSupporting text\nB is correct\n\nSource\ndoc (http://x)\n\nfast mode, 1 attempt, 2.3s\n"
        );
    }

    #[test]
    fn test_pretty_footer_for_verified_answer() {
        let text = ConsoleFormatter::new(false).format_pretty(
            &output(2, true),
            SearchMode::Accurate,
            Duration::from_secs(5),
        );
        assert!(text.ends_with("accurate mode, 2 attempts, verified, 5.0s\n"));
    }

    #[test]
    fn test_json_report() {
        let text = ConsoleFormatter::new(true).format(
            OutputFormat::Json,
            &output(1, false),
            SearchMode::Fast,
            Duration::from_millis(1500),
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["answer"], "B");
        assert_eq!(value["supporting_text"], "**B** is correct");
        assert_eq!(value["source"], "[doc](http://x)");
        assert_eq!(value["mode"], "fast");
        assert_eq!(value["attempts"], 1);
        assert_eq!(value["verified"], false);
        assert_eq!(value["elapsed_ms"], 1500);
    }

    #[test]
    fn test_error_without_color() {
        assert_eq!(
            ConsoleFormatter::new(false).format_error("boom"),
            "Error: boom"
        );
    }
}
