//! # Spellcheck
//!
//! An in-memory spelling dictionary for Rust.
//!
//! ## Features
//!
//! - Prefix-tree word storage, safe to share between threads
//! - Exact lookups and "did you mean" suggestions
//! - Suggestions from bounded deletions, transpositions, substitutions and insertions
//! - Bulk population from any line-oriented reader or word list file
//!
//! ```
//! use spellcheck::spelling::Dictionary;
//!
//! let dictionary = Dictionary::new(1);
//! dictionary.insert_reader("word\nworld\n".as_bytes());
//!
//! let result = dictionary.search("wrod");
//! assert!(!result.found());
//! assert_eq!(result.suggestions(), &["word".to_string()]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::{DEFAULT_ALPHABET, DEFAULT_DEPTH, DictionaryConfig};
    pub use crate::error::{Result, SpellcheckError};
    pub use crate::spelling::{Dictionary, SearchResult, VariationGenerator, WordSource};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
