//! # Enhancement Extraction
//!
//! Scans a paragraph's raw text for bare URLs and classifies each into a
//! preview [`Card`]. This re-scans the full text; it does not depend on what
//! the inline tokenizer committed.

pub mod classify;
pub mod types;

pub use classify::{classify, domain_of};
pub use types::Card;

use crate::parsing::url::find_urls;

/// One card per URL in `paragraph`, in text order. Empty when there are none.
pub fn extract_enhancements(paragraph: &str) -> Vec<Card> {
    find_urls(paragraph).map(|(_, raw)| classify(raw)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn youtube_in_sentence() {
        assert_eq!(
            extract_enhancements("see https://youtube.com/watch?v=abc123"),
            vec![Card::YouTubeEmbed {
                video_id: "abc123".into()
            }]
        );
    }

    #[test]
    fn image_with_uppercase_extension() {
        assert_eq!(
            extract_enhancements("photo at https://example.com/pic.PNG"),
            vec![Card::ImageCard {
                url: "https://example.com/pic.PNG".into()
            }]
        );
    }

    #[test]
    fn bare_domain_with_path() {
        assert_eq!(extract_enhancements("visit example.com/page"), vec![Card::LinkCard {
            url: "https://example.com/page".into(),
            domain: "example.com".into()
        }]);
    }

    #[test]
    fn cards_follow_text_order() {
        let cards = extract_enhancements(
            "a https://vimeo.com/42 b www.x.io/movie.mp4 c https://docs.rs/regex.",
        );
        let kinds: Vec<_> = cards.iter().map(Card::kind_name).collect();
        assert_eq!(kinds, vec!["VimeoEmbed", "VideoCard", "LinkCard"]);
        assert_eq!(cards[2], Card::LinkCard {
            url: "https://docs.rs/regex".into(),
            domain: "docs.rs".into()
        });
    }

    #[test]
    fn urls_inside_link_syntax_still_produce_cards() {
        let cards = extract_enhancements("[Order](https://shop.io/menu) now");
        assert_eq!(cards, vec![Card::LinkCard {
            url: "https://shop.io/menu".into(),
            domain: "shop.io".into()
        }]);
    }

    #[test]
    fn no_urls_no_cards() {
        assert!(extract_enhancements("nothing to see here.").is_empty());
        assert!(extract_enhancements("").is_empty());
    }

    #[test]
    fn dotted_name_with_path_becomes_link_card() {
        assert_eq!(extract_enhancements("built with node.js/react"), vec![Card::LinkCard {
            url: "https://node.js/react".into(),
            domain: "node.js".into()
        }]);
    }
}
