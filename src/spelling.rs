//! Spelling dictionary and correction candidates.
//!
//! The [`Dictionary`] stores known words in a prefix tree guarded by a single
//! reader/writer lock. On a miss it asks the [`VariationGenerator`] for
//! candidates a bounded number of edits away and keeps the ones it knows.

mod node;
pub mod source;
pub mod trie;
pub mod variations;

// Re-export commonly used types
pub use source::{LineSource, WordSource, load_word_file};
pub use trie::{Dictionary, SearchResult};
pub use variations::{VariationGenerator, generate_variations};
