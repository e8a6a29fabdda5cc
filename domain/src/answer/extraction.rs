//! JSON extraction from free-form model replies.
//!
//! Search models wrap the requested JSON in commentary and sprinkle
//! footnote markers such as `[^1^]` through the text. These functions are
//! pure text scanning with no I/O.
//!
//! # Functions
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`strip_citation_markers`] | Remove `[^N^]` footnote markers |
//! | [`extract_json_object`] | Strip markers, then return the first balanced `{...}` span |
//!
//! # Limitations
//!
//! This is a heuristic, not a JSON parser. It balances braces (skipping
//! braces inside string literals) and returns the first span that closes.
//! Several candidate objects are not disambiguated: the first one wins.
//! The returned span is not validated; see
//! [`StructuredAnswer::from_json`](super::structured::StructuredAnswer::from_json).

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static CITATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\^\d+\^\]").expect("citation marker pattern is valid"));

/// Remove citation footnote markers (`[^1^]`, `[^23^]`, ...) from a reply.
pub fn strip_citation_markers(text: &str) -> Cow<'_, str> {
    CITATION_MARKER.replace_all(text, "")
}

/// Locate the first JSON object embedded in a model reply.
///
/// Citation markers are stripped first, so the returned text is the object
/// as it appears in the cleaned reply. Returns `None` when no balanced
/// `{...}` span exists; absence is never an error.
///
/// # Examples
///
/// ```
/// use scout_domain::answer::extraction::extract_json_object;
///
/// let reply = r#"Found it. {"answer":"B"} [^1^]"#;
/// assert_eq!(extract_json_object(reply).as_deref(), Some(r#"{"answer":"B"}"#));
/// assert_eq!(extract_json_object("no json here"), None);
/// ```
pub fn extract_json_object(text: &str) -> Option<String> {
    let cleaned = strip_citation_markers(text);
    find_balanced_object(&cleaned).map(str::to_string)
}

/// Return the earliest-starting `{...}` span that closes.
///
/// One pass over the bytes. Open brace offsets sit on a stack; an opening
/// brace that never closes stays on it and is simply never reported. String
/// literals are only tracked inside an open brace.
///
/// Braces and quotes are ASCII, so slicing at their offsets never splits a
/// UTF-8 sequence.
fn find_balanced_object(text: &str) -> Option<&str> {
    let mut open: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in text.as_bytes().iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push(i),
            b'}' => {
                let Some(start) = open.pop() else { continue };
                if open.is_empty() {
                    // Nothing that started earlier is still open.
                    return Some(&text[start..=i]);
                }
                if best.is_none_or(|(s, _)| start < s) {
                    best = Some((start, i));
                }
            }
            _ => {}
        }
    }

    best.map(|(start, end)| &text[start..=end])
}
