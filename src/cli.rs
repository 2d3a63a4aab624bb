//! Command Line Interface for the spellcheck dictionary.

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
