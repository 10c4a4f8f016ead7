//! # Inline Token Kinds
//!
//! Each kind owns one independent pattern. Adding a kind means adding a
//! variant here and a case in `Candidate::into_node`; the resolution pass
//! does not change.
//!
//! Patterns are compiled once into immutable automata. Scanning state lives
//! in the per-call iterator, so kinds and calls never share position state.

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::url::URL_PATTERN;

/// Link target accepted by the bracketed kinds.
const TARGET: &str = r"(https?://[^\s)]+|www\.[^\s)]+)";

/// Candidate kinds, declared in tie-break order: when two candidates share
/// both start and end, the earlier kind wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    CodeSpan,
    Image,
    ButtonLink,
    Link,
    Bold,
    Italic,
    RawUrl,
}

impl TokenKind {
    pub const ALL: [TokenKind; 7] = [
        TokenKind::CodeSpan,
        TokenKind::Image,
        TokenKind::ButtonLink,
        TokenKind::Link,
        TokenKind::Bold,
        TokenKind::Italic,
        TokenKind::RawUrl,
    ];

    fn pattern(self) -> String {
        match self {
            TokenKind::CodeSpan => r"`([^`]+)`".to_string(),
            TokenKind::Image => format!(r"!\[([^\]]*)\]\({TARGET}\)"),
            TokenKind::ButtonLink => format!(r"(?i)\[(?:button|btn):\s*([^\]]+)\]\({TARGET}\)"),
            TokenKind::Link => format!(r"\[([^\]]+)\]\({TARGET}\)"),
            TokenKind::Bold => r"\*\*([^*]+)\*\*".to_string(),
            TokenKind::Italic => r"\*([^*]+)\*".to_string(),
            TokenKind::RawUrl => URL_PATTERN.to_string(),
        }
    }

    /// The compiled pattern for this kind.
    pub fn regex(self) -> &'static Regex {
        static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
        let all = PATTERNS.get_or_init(|| {
            TokenKind::ALL
                .iter()
                .map(|k| Regex::new(&k.pattern()).expect("Invalid inline token regex"))
                .collect()
        });
        &all[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, k) in TokenKind::ALL.iter().enumerate() {
            assert_eq!(*k as usize, i);
        }
    }

    #[test]
    fn every_pattern_compiles() {
        for k in TokenKind::ALL {
            assert!(!k.regex().as_str().is_empty());
        }
    }

    #[test]
    fn button_prefix_is_case_insensitive() {
        assert!(TokenKind::ButtonLink.regex().is_match("[BTN: Go](https://x.io)"));
        assert!(TokenKind::ButtonLink.regex().is_match("[Button:Buy](www.shop.io)"));
    }

    #[test]
    fn bold_content_excludes_stars() {
        assert!(!TokenKind::Bold.regex().is_match("**a*b**"));
    }
}
