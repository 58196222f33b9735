//! Input text cleaning for language identification.
//!
//! Raw request text arrives with URLs, newlines, tabs, and ragged spacing
//! that skew a classifier's token statistics. Cleaning reduces it to a
//! single space-separated line of ordinary words before prediction.

/// Clean raw text into a single-line, single-spaced string.
///
/// Input: arbitrary text ("veja https://example.com\r\namanhã")
/// Output: cleaned text ("veja amanhã")
///
/// # Algorithm
///
/// 1. Remove URL-like runs: from any `http` occurrence followed by at
///    least one more character, through the end of the surrounding
///    non-whitespace run (covers http:// and https://, with or without
///    attached punctuation). Characters before the occurrence survive.
/// 2. Treat carriage returns, line feeds, and tabs as token separators.
/// 3. Collapse whitespace runs into single spaces and trim the ends.
///
/// Idempotent: cleaning already-clean text changes nothing.
pub fn clean_text(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for token in raw.split_whitespace() {
        let kept = strip_url_run(token);
        if kept.is_empty() {
            continue;
        }
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(kept);
    }
    cleaned
}

/// Cut a token at its first `http` occurrence, dropping the occurrence and
/// everything after it. `http` needs at least one more character after it
/// to count as a URL, so a token ending in bare `http` stays whole.
fn strip_url_run(token: &str) -> &str {
    match token.find("http") {
        Some(start) if start + "http".len() < token.len() => &token[..start],
        _ => token,
    }
}
