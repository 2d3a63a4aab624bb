//! Prefix-tree dictionary with edit-distance fallback suggestions.

use std::io::BufRead;

use log::{debug, trace};
use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DEPTH, DictionaryConfig};
use crate::error::Result;
use crate::spelling::node::LetterNode;
use crate::spelling::source::{LineSource, WordSource};
use crate::spelling::variations::VariationGenerator;

/// Outcome of a [`Dictionary::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query word.
    pub word: String,
    /// Whether the word is in the dictionary.
    pub found: bool,
    /// Dictionary words reachable by bounded edits, in generation order.
    /// Always empty when `found` is true.
    pub suggestions: Vec<String>,
}

impl SearchResult {
    fn hit(word: &str) -> Self {
        SearchResult {
            word: word.to_string(),
            found: true,
            suggestions: Vec::new(),
        }
    }

    fn miss(word: &str, suggestions: Vec<String>) -> Self {
        SearchResult {
            word: word.to_string(),
            found: false,
            suggestions,
        }
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Split into the `(found, suggestions)` pair.
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.found, self.suggestions)
    }
}

/// Tree state behind the lock. The root is created by the first insertion.
#[derive(Debug, Default)]
struct TrieState {
    root: Option<LetterNode>,
    word_count: usize,
}

impl TrieState {
    fn contains(&self, word: &str) -> bool {
        self.root.as_ref().is_some_and(|root| root.contains(word))
    }
}

/// An in-memory spelling dictionary backed by a prefix tree.
///
/// The whole tree sits behind one reader/writer lock: [`insert`](Self::insert)
/// takes it exclusively, lookups share it. A lookup takes the read lock once
/// and confirms every suggestion against that same guard without re-locking.
///
/// # Examples
///
/// ```
/// use spellcheck::spelling::Dictionary;
///
/// let dictionary = Dictionary::new(1);
/// dictionary.insert("cat");
/// dictionary.insert("bat");
///
/// assert!(dictionary.search_direct("cat"));
///
/// let result = dictionary.search("rat");
/// assert!(!result.found());
/// assert!(result.suggestions().contains(&"cat".to_string()));
/// ```
#[derive(Debug)]
pub struct Dictionary {
    state: RwLock<TrieState>,
    generator: VariationGenerator,
    depth: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Dictionary {
    /// Create an empty dictionary generating suggestions up to `depth` edits
    /// away. A depth of zero disables suggestions.
    pub fn new(depth: usize) -> Self {
        Dictionary {
            state: RwLock::new(TrieState::default()),
            generator: VariationGenerator::default(),
            depth,
        }
    }

    /// Create an empty dictionary from a validated configuration.
    pub fn with_config(config: DictionaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Dictionary {
            state: RwLock::new(TrieState::default()),
            generator: VariationGenerator::from_config(&config),
            depth: config.depth,
        })
    }

    /// Create a dictionary and fill it from `source`.
    pub fn from_source<S: WordSource>(depth: usize, source: S) -> Self {
        let dictionary = Dictionary::new(depth);
        dictionary.populate(source);
        dictionary
    }

    /// The configured edit depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.state.read().word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    /// Add a word. Inserting a word that is already present changes nothing.
    pub fn insert(&self, word: &str) {
        let mut state = self.state.write();
        let inserted = state.root.get_or_insert_with(LetterNode::new).insert(word);
        if inserted {
            state.word_count += 1;
        }
    }

    /// Drain `source` once, inserting every word it yields.
    /// Returns the number of words consumed.
    pub fn populate<S: WordSource>(&self, source: S) -> usize {
        let mut consumed = 0;
        for word in source.into_words() {
            self.insert(&word);
            consumed += 1;
        }
        debug!(
            "populated dictionary with {consumed} words ({} distinct)",
            self.word_count()
        );
        consumed
    }

    /// Insert every non-blank line of `reader`. A read error ends the input
    /// early; whatever was read before it stays in the dictionary.
    pub fn insert_reader<R: BufRead>(&self, reader: R) -> usize {
        self.populate(LineSource::new(reader))
    }

    /// Exact lookup, without suggestions.
    pub fn search_direct(&self, word: &str) -> bool {
        self.state.read().contains(word)
    }

    /// Look up `word`, falling back to edit-distance suggestions on a miss.
    ///
    /// The walk stops at the first character with no matching child. The
    /// whole query word is then expanded by the variation generator and only
    /// candidates present in the dictionary are kept, in generation order.
    pub fn search(&self, word: &str) -> SearchResult {
        let state = self.state.read();
        self.search_locked(&state, word)
    }

    /// Run [`search`](Self::search) for every word under a single read guard,
    /// in parallel. Results come back in input order.
    pub fn search_many<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<SearchResult> {
        let guard = self.state.read();
        let state = &*guard;
        words
            .par_iter()
            .map(|word| self.search_locked(state, word.as_ref()))
            .collect()
    }

    fn search_locked(&self, state: &TrieState, word: &str) -> SearchResult {
        let Some(root) = state.root.as_ref() else {
            return SearchResult::miss(word, Vec::new());
        };

        match root.walk(word) {
            Some(node) if node.is_word() => SearchResult::hit(word),
            // Every character matched but no word ends here: a known prefix
            // gets no suggestions.
            Some(_) => SearchResult::miss(word, Vec::new()),
            None => {
                let suggestions: Vec<String> = self
                    .generator
                    .generate(word, self.depth)
                    .into_iter()
                    .filter(|candidate| root.contains(candidate))
                    .collect();
                trace!("{word:?}: {} suggestions", suggestions.len());
                SearchResult::miss(word, suggestions)
            }
        }
    }
}
