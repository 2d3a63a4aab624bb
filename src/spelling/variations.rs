//! Candidate generation by bounded character-level edits.
//!
//! A single edit is one of four operations, always applied in this order:
//! deletions, adjacent transpositions, substitutions and insertions.
//! Substitutions and insertions draw their symbols from an alphabet, the
//! lowercase letters `a` to `z` by default.
//!
//! At depth `d > 1` every candidate produced by a single edit of the word is
//! expanded again with depth `d - 1`. The candidate count grows by roughly
//! `27 * len(word)` per level, so the depth should stay a small constant.

use ahash::{AHashMap, AHashSet};
use log::warn;

use crate::config::{DEFAULT_ALPHABET, DictionaryConfig};

/// Generates spelling variations of a word.
#[derive(Debug, Clone)]
pub struct VariationGenerator {
    alphabet: Vec<char>,
    max_candidates: Option<usize>,
}

impl Default for VariationGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl VariationGenerator {
    /// Create a generator drawing substitutions and insertions from `alphabet`.
    pub fn new(alphabet: &str) -> Self {
        VariationGenerator {
            alphabet: alphabet.chars().collect(),
            max_candidates: None,
        }
    }

    /// Create a generator matching a dictionary configuration.
    pub fn from_config(config: &DictionaryConfig) -> Self {
        VariationGenerator {
            alphabet: config.alphabet_chars(),
            max_candidates: config.max_candidates,
        }
    }

    /// Stop generating once `max_candidates` distinct candidates exist.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Generate the distinct variations of `word` reachable with at most
    /// `depth` chained edits, in first-seen order.
    ///
    /// Returns an empty list when `depth` is zero or `word` is empty.
    pub fn generate(&self, word: &str, depth: usize) -> Vec<String> {
        let mut candidates = Candidates::new(self.max_candidates);
        let mut expanded = AHashMap::new();
        self.expand(word, depth, &mut candidates, &mut expanded);

        if candidates.truncated {
            warn!(
                "variation generation for {word:?} at depth {depth} stopped at {} candidates",
                candidates.order.len()
            );
        }
        candidates.order
    }

    /// All single-edit variants of `word`, family by family, duplicates kept.
    pub fn single_edits(&self, word: &[char]) -> Vec<String> {
        let family_sizes = 2 * word.len() + (2 * word.len() + 1) * self.alphabet.len();
        let mut edits = Vec::with_capacity(family_sizes);
        edits.extend(deletions(word));
        edits.extend(transpositions(word));
        edits.extend(substitutions(word, &self.alphabet));
        edits.extend(insertions(word, &self.alphabet));
        edits
    }

    // `expanded` holds finished expansions and their budgets. A word whose
    // expansion is still in progress is expanded again where it reappears.
    fn expand(
        &self,
        word: &str,
        depth: usize,
        candidates: &mut Candidates,
        expanded: &mut AHashMap<String, usize>,
    ) {
        if depth == 0 || word.is_empty() || candidates.is_full() {
            return;
        }
        if expanded.get(word).is_some_and(|&done| done >= depth) {
            return;
        }
        let chars: Vec<char> = word.chars().collect();
        let edits = self.single_edits(&chars);
        for edit in &edits {
            if !candidates.push(edit) {
                return;
            }
        }

        if depth > 1 {
            let mut visited = AHashSet::with_capacity(edits.len());
            for edit in &edits {
                if visited.insert(edit.as_str()) {
                    self.expand(edit, depth - 1, candidates, expanded);
                }
            }
        }
        expanded.insert(word.to_string(), depth);
    }
}

/// Generate variations with the default alphabet and no candidate cap.
pub fn generate_variations(word: &str, depth: usize) -> Vec<String> {
    VariationGenerator::default().generate(word, depth)
}

/// The word with one character removed, for each position.
pub fn deletions(word: &[char]) -> Vec<String> {
    (0..word.len())
        .map(|i| word[..i].iter().chain(&word[i + 1..]).collect::<String>())
        .collect()
}

/// The word with each pair of adjacent characters swapped.
pub fn transpositions(word: &[char]) -> Vec<String> {
    (0..word.len().saturating_sub(1))
        .map(|i| {
            let mut swapped = word.to_vec();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect::<String>()
        })
        .collect()
}

/// The word with each position replaced by each alphabet symbol.
///
/// Includes the no-op replacement where the symbol equals the original.
pub fn substitutions(word: &[char], alphabet: &[char]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(word.len() * alphabet.len());
    for i in 0..word.len() {
        for &c in alphabet {
            result.push(
                word[..i]
                    .iter()
                    .chain(std::iter::once(&c))
                    .chain(&word[i + 1..])
                    .collect(),
            );
        }
    }
    result
}

/// The word with each alphabet symbol inserted before each position,
/// including the position past the end.
pub fn insertions(word: &[char], alphabet: &[char]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity((word.len() + 1) * alphabet.len());
    for i in 0..=word.len() {
        for &c in alphabet {
            result.push(
                word[..i]
                    .iter()
                    .chain(std::iter::once(&c))
                    .chain(&word[i..])
                    .collect(),
            );
        }
    }
    result
}

/// Ordered, deduplicated candidate accumulator.
struct Candidates {
    seen: AHashSet<String>,
    order: Vec<String>,
    limit: Option<usize>,
    truncated: bool,
}

impl Candidates {
    fn new(limit: Option<usize>) -> Self {
        Candidates {
            seen: AHashSet::new(),
            order: Vec::new(),
            limit,
            truncated: false,
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.order.len() >= limit)
    }

    /// Record a candidate. Returns false once the limit has been reached.
    fn push(&mut self, candidate: &str) -> bool {
        if self.seen.contains(candidate) {
            return true;
        }
        if self.is_full() {
            self.truncated = true;
            return false;
        }
        self.seen.insert(candidate.to_string());
        self.order.push(candidate.to_string());
        true
    }
}
