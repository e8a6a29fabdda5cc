//! Text helpers shared by the log-preview call sites.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_len` bytes for a log preview.
///
/// Text that already fits comes back unchanged. Longer text keeps as many
/// whole characters as fit alongside a trailing `...`, so multibyte input
/// is never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_owned();
    }
    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let cut = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);
    let mut preview = String::with_capacity(cut + ELLIPSIS.len());
    preview.push_str(&s[..cut]);
    preview.push_str(ELLIPSIS);
    preview
}
