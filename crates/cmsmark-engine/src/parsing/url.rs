//! Bare URL recognition shared by the inline tokenizer (which hides URLs) and
//! the enhancement extractor (which turns them into cards).

use std::sync::OnceLock;

use regex::Regex;

use super::span::Span;

/// `http(s)://…`, `www.…`, or a bare `host.tld/path`, word-bounded on both
/// sides so trailing punctuation is left out of the match.
pub const URL_PATTERN: &str = concat!(
    r"\b(?:",
    r"https?://\S+",
    r"|www\.\S+",
    r"|[A-Za-z0-9][A-Za-z0-9-]*(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}/\S*",
    r")\b",
);

pub fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("Invalid URL regex"))
}

/// Every bare URL in `text`, left to right, with its byte span.
pub fn find_urls(text: &str) -> impl Iterator<Item = (Span, &str)> {
    url_regex()
        .find_iter(text)
        .map(|m| (Span::new(m.start(), m.end()), m.as_str()))
}

/// Prefixes `https://` unless the string already has an http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    if has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("https://{raw}")
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = |n: usize| s.get(..n).map(str::to_ascii_lowercase);
    lower(7).as_deref() == Some("http://") || lower(8).as_deref() == Some("https://")
}
