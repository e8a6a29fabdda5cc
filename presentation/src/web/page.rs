//! View model and HTML for the search page
//!
//! Every request builds its own [`SearchPage`]; nothing about a previous
//! submission survives between requests.

use crate::markup::{escape_html, render_markup};
use crate::progress::timer::format_elapsed;
use scout_domain::{SearchMode, StructuredAnswer};
use std::time::Duration;

/// Result panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Answer(StructuredAnswer),
    Error(String),
}

/// Request-scoped state of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub question: String,
    pub mode: SearchMode,
    pub outcome: Option<PageOutcome>,
    /// Wall time of the submission that produced `outcome`.
    pub elapsed: Option<Duration>,
}

impl Default for SearchPage {
    fn default() -> Self {
        Self::blank()
    }
}

impl SearchPage {
    /// Empty form, fast mode selected.
    pub fn blank() -> Self {
        Self {
            question: String::new(),
            mode: SearchMode::default(),
            outcome: None,
            elapsed: None,
        }
    }

    pub fn with_input(question: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            question: question.into(),
            mode,
            ..Self::blank()
        }
    }

    pub fn with_outcome(mut self, outcome: PageOutcome, elapsed: Duration) -> Self {
        self.outcome = Some(outcome);
        self.elapsed = Some(elapsed);
        self
    }

    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>quiz-scout</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>quiz-scout</h1>
{notes}
<form method="post" action="/">
<textarea name="question" rows="8" placeholder="Paste the full question, including the options" required>{question}</textarea>
<fieldset class="modes">
{fast}
{accurate}
</fieldset>
<button type="submit">Search</button>
</form>
{result}
</main>
</body>
</html>
"#,
            style = STYLE,
            notes = NOTES,
            question = escape_html(&self.question),
            fast = self.mode_radio(SearchMode::Fast),
            accurate = self.mode_radio(SearchMode::Accurate),
            result = self.render_result(),
        )
    }

    fn mode_radio(&self, mode: SearchMode) -> String {
        format!(
            r#"<label><input type="radio" name="mode" value="{value}"{checked}> {description}</label>"#,
            value = mode,
            checked = if self.mode == mode { " checked" } else { "" },
            description = escape_html(mode.short_description()),
        )
    }

    fn render_result(&self) -> String {
        let Some(outcome) = &self.outcome else {
            return String::new();
        };

        let meta = format!(
            r#"<p class="meta">{} mode{}</p>"#,
            self.mode,
            self.elapsed
                .map(|elapsed| format!(", {}", format_elapsed(elapsed)))
                .unwrap_or_default()
        );

        match outcome {
            PageOutcome::Answer(answer) => format!(
                r#"<section class="result">
<h2>Answer</h2>
<p>{}</p>
<h2>Supporting text</h2>
<p>{}</p>
<h2>Source</h2>
<p>{}</p>
{}
</section>"#,
                rich(&answer.answer),
                rich(&answer.supporting_text),
                rich(&answer.source),
                meta
            ),
            PageOutcome::Error(message) => format!(
                r#"<section class="result error">
<p>{}</p>
{}
</section>"#,
                escape_html(message),
                meta
            ),
        }
    }
}

/// Model text is escaped before markup is expanded.
fn rich(text: &str) -> String {
    render_markup(&escape_html(text))
}

const NOTES: &str = r#"<section class="notes">
<h2>How to use</h2>
<p>Paste the whole question into the box: its <strong>type</strong>, the <strong>stem</strong> and every <strong>option</strong>.</p>
<ul>
<li><strong>Fast</strong>: quick, but the answer occasionally disagrees with the supporting text.</li>
<li><strong>Accurate</strong>: a second model checks the answer against the supporting text. Slower and costs more.</li>
</ul>
<p>Fast mode is enough most of the time.</p>
<p class="disclaimer">Searching and answering are done entirely by language models, which can make things up. Treat answers as a reference only.</p>
</section>"#;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f5f7fa;margin:0}\
main{max-width:48rem;margin:2rem auto;padding:0 1rem}\
textarea{width:100%;box-sizing:border-box;padding:.5rem;font:inherit}\
.modes{border:none;padding:0;margin:.75rem 0;display:flex;gap:1.5rem}\
button{padding:.5rem 1.5rem;background:#2563eb;color:#fff;border:none;border-radius:.25rem}\
.result{margin-top:1.5rem;padding:1rem;background:#fff;border-radius:.5rem}\
.result h2{font-size:1rem;color:#555;margin:.75rem 0 .25rem}\
.error{color:#b91c1c}\
.highlight{color:#2563eb}\
.meta{color:#888;font-size:.875rem}\
.notes{background:#fff;border-radius:.5rem;padding:.75rem 1rem;margin-bottom:1rem;color:#444}\
.notes h2{font-size:1.05rem;margin:.25rem 0}\
.disclaimer{color:#888;font-size:.8rem}";
