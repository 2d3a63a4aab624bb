//! Configuration for spelling dictionaries.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellcheckError};

/// Default edit depth used when generating suggestions.
pub const DEFAULT_DEPTH: usize = 1;

/// Default alphabet used for substitutions and insertions.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Configuration for a [`Dictionary`](crate::spelling::Dictionary).
///
/// Generation cost grows exponentially with `depth`, so it should stay a
/// small constant. `max_candidates` puts a hard ceiling on the number of
/// candidates a single miss may generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Maximum number of chained single-character edits.
    /// Zero disables suggestion generation.
    pub depth: usize,

    /// Symbols tried by substitutions and insertions.
    pub alphabet: String,

    /// Upper bound on generated candidates per lookup.
    /// If None, generation is unbounded.
    pub max_candidates: Option<usize>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            alphabet: DEFAULT_ALPHABET.to_string(),
            max_candidates: None,
        }
    }
}

impl DictionaryConfig {
    /// Create a configuration with the given depth and default alphabet.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Set the edit depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the alphabet used for substitutions and insertions.
    pub fn with_alphabet<S: Into<String>>(mut self, alphabet: S) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Cap the number of generated candidates.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: DictionaryConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a dictionary.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(SpellcheckError::invalid_config("alphabet must not be empty"));
        }

        let mut seen = AHashSet::with_capacity(self.alphabet.len());
        for c in self.alphabet.chars() {
            if !seen.insert(c) {
                return Err(SpellcheckError::invalid_config(format!(
                    "alphabet contains '{c}' more than once"
                )));
            }
        }

        if self.max_candidates == Some(0) {
            return Err(SpellcheckError::invalid_config(
                "max_candidates must be greater than zero",
            ));
        }

        Ok(())
    }

    /// The alphabet as a list of symbols, in declaration order.
    pub fn alphabet_chars(&self) -> Vec<char> {
        self.alphabet.chars().collect()
    }
}
