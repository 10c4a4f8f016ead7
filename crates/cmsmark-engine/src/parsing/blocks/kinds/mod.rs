//! # Block Kinds
//!
//! Each block type owns its line syntax here; the builder only asks these
//! types whether a line opens, continues or interrupts a block.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use paragraph::Paragraph;
pub use table::Table;
pub use thematic_break::ThematicBreak;
