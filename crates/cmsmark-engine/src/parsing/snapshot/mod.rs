//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed document to a stable `Snap` format
//!   for `insta` debug snapshots
//! - **`invariants`**: Runtime checks for parser correctness (line steps tile
//!   each segment, inline spans tile each text run, cards only on paragraphs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
