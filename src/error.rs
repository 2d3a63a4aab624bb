//! Error types for the spellcheck library.
//!
//! Dictionary lookups and insertions never fail: an unknown word is a normal
//! `false` result. Errors only surface at the edges of the crate, when a word
//! list or configuration file is read, when a configuration is validated, or
//! when the command line asks for something invalid.
//!
//! # Examples
//!
//! ```
//! use spellcheck::error::{SpellcheckError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellcheckError::invalid_argument("depth must be a number"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellcheck operations.
#[derive(Error, Debug)]
pub enum SpellcheckError {
    /// I/O errors (opening or reading word lists and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument passed from the command line or an API caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with SpellcheckError.
pub type Result<T> = std::result::Result<T, SpellcheckError>;

impl SpellcheckError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellcheckError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellcheckError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellcheckError::invalid_config("alphabet is empty");
        assert_eq!(error.to_string(), "Invalid configuration: alphabet is empty");

        let error = SpellcheckError::invalid_argument("no words given");
        assert_eq!(error.to_string(), "Invalid argument: no words given");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SpellcheckError::from(io_error);

        match error {
            SpellcheckError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = SpellcheckError::from(json_error);
        assert!(matches!(error, SpellcheckError::Json(_)));
    }
}
