//! Trie-based suffix matcher for escape sequences.
//!
//! Sequences are inserted reversed, so walking the trie from the character
//! just before the cursor towards the start of the text visits every
//! sequence that ends at the cursor. The deepest terminal node reached is
//! the longest match.

use std::collections::BTreeMap;

use crate::mapping::MappingTable;

/// A node in the reversed-sequence trie.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Index into the matcher's sequence list if a sequence ends here
    sequence: Option<usize>,
    /// Child nodes indexed by the previous character of the sequence
    children: BTreeMap<char, TrieNode>,
}

/// Result of probing the trie with a reversed character run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The probe is exactly one sequence (reversed)
    Exact(usize),
    /// The probe is the tail of one or more longer sequences
    Partial,
    /// No sequence ends with the probe
    NoMatch,
}

/// Longest sequence found at the end of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Index of the sequence in [`SuffixMatcher::sequence`]
    pub index: usize,
    /// Rune length of the sequence
    pub rune_len: usize,
}

/// Reversed trie over a mapping table's sequences.
#[derive(Debug, Clone, Default)]
pub struct SuffixMatcher {
    root: TrieNode,
    sequences: Vec<String>,
}

impl SuffixMatcher {
    /// Create an empty matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matcher over every sequence of `table`.
    pub fn from_table(table: &MappingTable) -> Self {
        let mut matcher = Self::new();
        for sequence in table.ordered_sequences() {
            matcher.insert(sequence);
        }
        matcher
    }

    /// Register a sequence, returning its index.
    ///
    /// Re-inserting a known sequence returns the existing index.
    pub fn insert(&mut self, sequence: &str) -> usize {
        let mut current = &mut self.root;
        for ch in sequence.chars().rev() {
            current = current.children.entry(ch).or_default();
        }
        if let Some(index) = current.sequence {
            return index;
        }
        let index = self.sequences.len();
        current.sequence = Some(index);
        self.sequences.push(sequence.to_string());
        index
    }

    /// The sequence registered under `index`.
    pub fn sequence(&self, index: usize) -> Option<&str> {
        self.sequences.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Find the longest registered sequence `text` ends with.
    ///
    /// # Examples
    ///
    /// ```
    /// use latexkit_core::sequence_matcher::SuffixMatcher;
    ///
    /// let mut matcher = SuffixMatcher::new();
    /// matcher.insert("b");
    /// let ab = matcher.insert("ab");
    ///
    /// let found = matcher.find_longest_suffix("xab").unwrap();
    /// assert_eq!(found.index, ab);
    /// assert_eq!(found.rune_len, 2);
    /// ```
    pub fn find_longest_suffix(&self, text: &str) -> Option<SuffixMatch> {
        let mut longest = None;
        let mut current = &self.root;

        for (depth, ch) in text.chars().rev().enumerate() {
            match current.children.get(&ch) {
                Some(child) => {
                    current = child;
                    if let Some(index) = current.sequence {
                        longest = Some(SuffixMatch {
                            index,
                            rune_len: depth + 1,
                        });
                    }
                }
                None => break,
            }
        }

        longest
    }

    /// Classify the text immediately before a cursor.
    ///
    /// `tail` is read as the last characters typed: `Exact` when it is a
    /// whole sequence, `Partial` when some longer sequence ends with it.
    pub fn match_suffix(&self, tail: &str) -> MatchResult {
        if tail.is_empty() {
            return MatchResult::NoMatch;
        }

        match self.find_node(tail) {
            Some(node) => match node.sequence {
                Some(index) => MatchResult::Exact(index),
                None => MatchResult::Partial,
            },
            None => MatchResult::NoMatch,
        }
    }

    fn find_node(&self, tail: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for ch in tail.chars().rev() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }
}
