//! Letter nodes of the prefix tree.

use ahash::AHashMap;

/// A single letter position in the prefix tree.
///
/// Each node exclusively owns its children; there are no back references.
#[derive(Debug, Default)]
pub(crate) struct LetterNode {
    children: AHashMap<char, LetterNode>,
    is_word: bool,
}

impl LetterNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Walk `word` from this node, creating missing children, and mark the
    /// last node as terminal. Returns true if the word was not present before.
    pub(crate) fn insert(&mut self, word: &str) -> bool {
        let mut node = self;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        true
    }

    /// Follow `word` from this node. Returns None as soon as a character has
    /// no matching child.
    pub(crate) fn walk(&self, word: &str) -> Option<&LetterNode> {
        let mut node = self;
        for c in word.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(LetterNode::is_word)
    }

    pub(crate) fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of nodes below this one, including itself.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(LetterNode::node_count)
            .sum::<usize>()
    }
}
