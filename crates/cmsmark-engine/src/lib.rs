//! Markup parsing and link-preview classification for CMS content.
//!
//! Three pure entry points do the work:
//!
//! - [`parse_blocks`] turns a text body into structural [`Block`]s
//! - [`tokenize_inline`] resolves styled spans in one block's text
//! - [`extract_enhancements`] classifies a paragraph's URLs into [`Card`]s
//!
//! [`render_html`] puts the three together the way the CMS front end shows
//! content.

pub mod enhance;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use enhance::{Card, domain_of, extract_enhancements};
pub use parsing::{
    Document, cards_for_block,
    blocks::{Block, parse_blocks},
    fence::{Segment, split_fences},
    inline::{InlineNode, LinkKind, tokenize_inline},
    inline_for_block, parse_document,
    span::Span,
};
pub use render::{RenderOptions, render_html};
