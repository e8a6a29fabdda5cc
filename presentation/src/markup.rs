//! Lightweight markup used inside answer fields.
//!
//! Models are asked to emphasise the key phrase with `**bold**` and to cite
//! with `[label](url)`. Only these two forms are recognised; everything else
//! passes through untouched.

use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Expand `**X**` and `[L](U)` into HTML.
///
/// Emphasis is applied before links, both non-greedy. Only `http://` and
/// `https://` targets become anchors; any other target leaves just the
/// label. The input is not escaped here; callers rendering untrusted text
/// should pass it through [`escape_html`] first.
pub fn render_markup(text: &str) -> String {
    let emphasised = EMPHASIS.replace_all(text, r#"<strong class="highlight">$1</strong>"#);
    LINK.replace_all(&emphasised, |caps: &Captures| {
        let (label, url) = (&caps[1], &caps[2]);
        if is_web_url(url) {
            format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{label}</a>"#)
        } else {
            label.to_string()
        }
    })
    .into_owned()
}

fn is_web_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("http://") || url.starts_with("https://")
}

/// Expand the same markup for a terminal.
///
/// With `color` off, emphasis markers are dropped and links become `L (U)`.
pub fn render_terminal(text: &str, color: bool) -> String {
    let emphasised = EMPHASIS.replace_all(text, |caps: &Captures| {
        if color {
            caps[1].bold().yellow().to_string()
        } else {
            caps[1].to_string()
        }
    });
    LINK.replace_all(&emphasised, |caps: &Captures| {
        if color {
            format!("{} ({})", &caps[1], caps[2].underline().blue())
        } else {
            format!("{} ({})", &caps[1], &caps[2])
        }
    })
    .into_owned()
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis() {
        assert_eq!(
            render_markup("**B** is correct"),
            r#"<strong class="highlight">B</strong> is correct"#
        );
    }

    #[test]
    fn test_emphasis_is_non_greedy() {
        assert_eq!(
            render_markup("**a** and **b**"),
            r#"<strong class="highlight">a</strong> and <strong class="highlight">b</strong>"#
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render_markup("[doc](http://x)"),
            r#"<a href="http://x" target="_blank" rel="noopener noreferrer">doc</a>"#
        );
    }

    #[test]
    fn test_non_web_link_target_keeps_label_only() {
        assert_eq!(
            render_markup("[click](javascript:alert(1)) and [f](file:///etc/passwd)"),
            "click) and f"
        );
        assert_eq!(render_markup("[x](data:text/html,hi)"), "x");
    }

    #[test]
    fn test_https_and_uppercase_scheme_are_links() {
        assert_eq!(
            render_markup("[s](HTTPS://example.com/a)"),
            r#"<a href="HTTPS://example.com/a" target="_blank" rel="noopener noreferrer">s</a>"#
        );
    }

    #[test]
    fn test_emphasis_inside_link_label() {
        assert_eq!(
            render_markup("[**key**](http://x)"),
            r#"<a href="http://x" target="_blank" rel="noopener noreferrer"><strong class="highlight">key</strong></a>"#
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "No markup here, not even *single* stars or [brackets].";
        assert_eq!(render_markup(text), text);
        assert_eq!(render_markup(""), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let text = "**x** [y](z)";
        assert_eq!(render_markup(text), render_markup(text));
    }

    #[test]
    fn test_escape_then_render() {
        let text = "<script>**x**</script> [a&b](http://h?q=1&r=\"2\")";
        assert_eq!(
            render_markup(&escape_html(text)),
            "&lt;script&gt;<strong class=\"highlight\">x</strong>&lt;/script&gt; \
             <a href=\"http://h?q=1&amp;r=&quot;2&quot;\" target=\"_blank\" rel=\"noopener noreferrer\">a&amp;b</a>"
        );
    }

    #[test]
    fn test_terminal_plain() {
        assert_eq!(
            render_terminal("**B** is correct, see [doc](http://x)", false),
            "B is correct, see doc (http://x)"
        );
    }
}
