//! # Inline Tokenizing
//!
//! Finds styled spans in one block's text and resolves overlaps into a
//! non-overlapping node sequence.
//!
//! ## Phases
//!
//! 1. **Candidates** (`candidates`): every kind in `kinds` scans the whole text
//!    independently; matches may overlap across kinds.
//! 2. **Resolution** (`resolve`): sort by start (longest first on ties) and
//!    commit with one forward cursor pass.
//!
//! ## Hidden links
//!
//! Button links, links and bare URLs consume their text but render nothing.
//! They show up as cards under the paragraph instead, so one URL is never
//! displayed twice.
//!
//! ## Bold and italic
//!
//! There is no precedence rule beyond the sort: `**x**` is bold because the
//! bold match is longer at the shared start. Bold content cannot contain `*`,
//! so `**bold *italic* text**` resolves to whatever the two independent
//! patterns leave after overlap resolution.

pub mod candidates;
pub mod kinds;
pub mod resolve;
pub mod types;

pub use candidates::{Candidate, collect_candidates};
pub use kinds::TokenKind;
pub use types::{InlineNode, LinkKind};

/// Tokenizes one block's raw text. Pure: equal input gives equal output.
pub fn tokenize_inline(text: &str) -> Vec<InlineNode> {
    resolve::resolve(text, collect_candidates(text))
}
