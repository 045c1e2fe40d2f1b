//! Longest-match replacement of escape sequences at the cursor.
//!
//! The [`Replacer`] looks only at the text immediately before the cursor.
//! When one or more known sequences end there, the longest one is swapped
//! for its replacement and the cursor is moved to just after it.

use indexmap::IndexMap;
use log::{debug, error, trace};
use std::sync::Arc;

use crate::document::Document;
use crate::error::{ReplaceError, ReplaceResult};
use crate::mapping::MappingTable;
use crate::sequence_matcher::SuffixMatcher;
use crate::unicode;

/// How candidate sequences are searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchStrategy {
    /// Scan the table's candidate order, longest first
    #[default]
    Ordered,
    /// Walk a reversed trie backwards from the cursor
    SuffixTrie,
}

/// Replacer settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplacerConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: MatchStrategy,
}

/// A sequence found ending at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMatch<'a> {
    /// The matched sequence
    pub sequence: &'a str,
    /// Rune offset where the sequence begins
    pub start_index: usize,
}

/// Record of a single substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedSequence {
    pub from: String,
    pub to: String,
}

/// Buffer state after a substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Full text with the sequence replaced
    pub new_text: String,
    /// Rune offset just after the inserted replacement
    pub new_cursor_position: usize,
    pub replaced: ReplacedSequence,
}

/// Replaces the longest known sequence ending at the cursor.
///
/// # Examples
///
/// ```
/// use latexkit_core::Replacer;
///
/// let replacer = Replacer::latex();
/// let result = replacer.try_replace("x = \\alpha", 10).unwrap().unwrap();
/// assert_eq!(result.new_text, "x = α");
/// assert_eq!(result.new_cursor_position, 5);
/// assert_eq!(result.replaced.from, "\\alpha");
/// ```
#[derive(Debug, Clone)]
pub struct Replacer {
    table: Arc<MappingTable>,
    config: ReplacerConfig,
    /// Built only for [`MatchStrategy::SuffixTrie`]
    matcher: Option<SuffixMatcher>,
}

impl Replacer {
    /// Create a replacer that scans the table's candidate order.
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self::with_config(table, ReplacerConfig::default())
    }

    /// Create a replacer with explicit settings.
    pub fn with_config(table: Arc<MappingTable>, config: ReplacerConfig) -> Self {
        let matcher = match config.strategy {
            MatchStrategy::Ordered => None,
            MatchStrategy::SuffixTrie => Some(SuffixMatcher::from_table(&table)),
        };
        Replacer {
            table,
            config,
            matcher,
        }
    }

    /// Create a replacer over the built-in LaTeX table.
    pub fn latex() -> Self {
        Self::new(Arc::new(MappingTable::latex()))
    }

    pub fn config(&self) -> ReplacerConfig {
        self.config
    }

    /// The shared table this replacer reads from.
    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }

    /// Find the longest known sequence ending exactly at `cursor_position`.
    ///
    /// Only `text[0..cursor_position)` is inspected. Offsets are rune
    /// indices; a cursor beyond the end of `text` is rejected.
    pub fn find_sequence_before_cursor<'a>(
        &'a self,
        text: &str,
        cursor_position: usize,
    ) -> ReplaceResult<Option<SequenceMatch<'a>>> {
        let cursor_byte = cursor_byte_index(text, cursor_position)?;
        let text_before_cursor = &text[..cursor_byte];

        let found = match &self.matcher {
            Some(matcher) => matcher
                .find_longest_suffix(text_before_cursor)
                .and_then(|found| matcher.sequence(found.index)),
            None => self
                .table
                .ordered_sequences()
                .find(|candidate| text_before_cursor.ends_with(*candidate)),
        };

        Ok(found.map(|sequence| SequenceMatch {
            sequence,
            start_index: cursor_position - unicode::rune_count(sequence),
        }))
    }

    /// Replace the sequence ending at `cursor_position`, if any.
    ///
    /// Returns `Ok(None)` when nothing matches; the caller keeps its buffer
    /// and cursor as they are.
    pub fn try_replace(
        &self,
        text: &str,
        cursor_position: usize,
    ) -> ReplaceResult<Option<Replacement>> {
        let Some(found) = self.find_sequence_before_cursor(text, cursor_position)? else {
            trace!("no sequence before cursor {cursor_position}");
            return Ok(None);
        };

        let replacement = self.table.get(found.sequence).ok_or_else(|| {
            error!(
                "sequence '{}' is ordered but has no replacement",
                found.sequence
            );
            ReplaceError::missing_replacement(found.sequence)
        })?;

        // the match ends exactly at the cursor
        let cursor_byte = unicode::byte_index_from_rune_index(text, cursor_position);
        let start_byte = cursor_byte - found.sequence.len();

        let mut new_text =
            String::with_capacity(text.len() - found.sequence.len() + replacement.len());
        new_text.push_str(&text[..start_byte]);
        new_text.push_str(replacement);
        new_text.push_str(&text[cursor_byte..]);

        let new_cursor_position = found.start_index + unicode::rune_count(replacement);

        debug!(
            "replaced '{}' with '{}' at {}",
            found.sequence, replacement, found.start_index
        );

        Ok(Some(Replacement {
            new_text,
            new_cursor_position,
            replaced: ReplacedSequence {
                from: found.sequence.to_string(),
                to: replacement.to_string(),
            },
        }))
    }

    /// Apply [`try_replace`](Self::try_replace) to a document.
    pub fn try_replace_document(&self, document: &Document) -> ReplaceResult<Option<Document>> {
        let replacement = self.try_replace(document.text(), document.cursor_position())?;
        Ok(replacement.map(|replacement| document.apply(&replacement)))
    }

    /// An owned copy of every mapping, in table order.
    pub fn get_all_mappings(&self) -> IndexMap<String, String> {
        self.table.to_map()
    }

    /// Whether `sequence` is an exact key of the table.
    pub fn is_valid_sequence(&self, sequence: &str) -> bool {
        self.table.contains(sequence)
    }
}

impl Default for Replacer {
    fn default() -> Self {
        Self::latex()
    }
}

/// Validate a rune cursor against `text` and convert it to a byte index.
fn cursor_byte_index(text: &str, cursor_position: usize) -> ReplaceResult<usize> {
    let max = unicode::rune_count(text);
    if cursor_position > max {
        return Err(ReplaceError::invalid_cursor_position(cursor_position, max));
    }
    Ok(unicode::byte_index_from_rune_index(text, cursor_position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacer(pairs: &[(&str, &str)]) -> Replacer {
        let table = MappingTable::from_pairs(pairs.iter().copied()).unwrap();
        Replacer::new(Arc::new(table))
    }

    #[test]
    fn test_longest_match_wins() {
        let replacer = replacer(&[("b", "β"), ("ab", "α")]);
        let result = replacer.try_replace("xab", 3).unwrap().unwrap();
        assert_eq!(result.new_text, "xα");
        assert_eq!(result.new_cursor_position, 2);
        assert_eq!(
            result.replaced,
            ReplacedSequence {
                from: "ab".to_string(),
                to: "α".to_string()
            }
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let replacer = replacer(&[("\\pi", "π")]);
        assert_eq!(replacer.try_replace("hello", 5).unwrap(), None);
        assert_eq!(replacer.try_replace("", 0).unwrap(), None);
        // idempotent: nothing accumulates between calls
        assert_eq!(replacer.try_replace("hello", 5).unwrap(), None);
    }

    #[test]
    fn test_cursor_repositioning() {
        let replacer = replacer(&[("pi", "π")]);
        let result = replacer.try_replace("pi", 2).unwrap().unwrap();
        assert_eq!(result.new_text, "π");
        assert_eq!(result.new_cursor_position, 1);
    }

    #[test]
    fn test_suffix_after_cursor_is_preserved() {
        let replacer = replacer(&[("pi", "π")]);
        let result = replacer.try_replace("pix", 2).unwrap().unwrap();
        assert_eq!(result.new_text, "πx");
        assert_eq!(result.new_cursor_position, 1);
    }

    #[test]
    fn test_only_text_before_cursor_is_considered() {
        let replacer = replacer(&[("pi", "π")]);
        // "pi" exists but ends after the cursor
        assert_eq!(replacer.try_replace("pi", 1).unwrap(), None);
        assert_eq!(replacer.try_replace("xpi", 0).unwrap(), None);
    }

    #[test]
    fn test_find_sequence_before_cursor() {
        let replacer = replacer(&[("\\pi", "π"), ("\\alpha", "α")]);
        let found = replacer
            .find_sequence_before_cursor("a \\alpha b", 8)
            .unwrap()
            .unwrap();
        assert_eq!(found.sequence, "\\alpha");
        assert_eq!(found.start_index, 2);
        assert_eq!(
            replacer.find_sequence_before_cursor("a \\alpha b", 9).unwrap(),
            None
        );
    }

    #[test]
    fn test_invalid_cursor_position() {
        let replacer = replacer(&[("pi", "π")]);
        assert_eq!(
            replacer.try_replace("pi", 3),
            Err(ReplaceError::InvalidCursorPosition {
                position: 3,
                max: 2
            })
        );
        // rune count, not byte length
        assert_eq!(
            replacer.find_sequence_before_cursor("αβ", 3),
            Err(ReplaceError::InvalidCursorPosition {
                position: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_multibyte_text_uses_rune_offsets() {
        let replacer = replacer(&[("\\to", "→")]);
        let result = replacer.try_replace("世界\\to🦀", 5).unwrap().unwrap();
        assert_eq!(result.new_text, "世界→🦀");
        assert_eq!(result.new_cursor_position, 3);
    }

    #[test]
    fn test_multi_rune_replacement() {
        let replacer = replacer(&[("\\iff", "<=>")]);
        let result = replacer.try_replace("a \\iff b", 6).unwrap().unwrap();
        assert_eq!(result.new_text, "a <=> b");
        assert_eq!(result.new_cursor_position, 5);
    }

    #[test]
    fn test_suffix_trie_strategy() {
        let table = Arc::new(MappingTable::from_pairs([("b", "β"), ("ab", "α")]).unwrap());
        let replacer = Replacer::with_config(
            table,
            ReplacerConfig {
                strategy: MatchStrategy::SuffixTrie,
            },
        );
        assert_eq!(replacer.config().strategy, MatchStrategy::SuffixTrie);

        let result = replacer.try_replace("xab", 3).unwrap().unwrap();
        assert_eq!(result.new_text, "xα");
        let result = replacer.try_replace("xb", 2).unwrap().unwrap();
        assert_eq!(result.new_text, "xβ");
        assert_eq!(replacer.try_replace("xa", 2).unwrap(), None);
    }

    #[test]
    fn test_document_replacement() {
        let replacer = Replacer::latex();
        let document = Document::with_text("let \\lambda x".to_string(), 11).unwrap();
        let replaced = replacer.try_replace_document(&document).unwrap().unwrap();
        assert_eq!(replaced.text(), "let λ x");
        assert_eq!(replaced.cursor_position(), 5);

        let untouched = Document::with_text("plain".to_string(), 5).unwrap();
        assert_eq!(replacer.try_replace_document(&untouched).unwrap(), None);
    }

    #[test]
    fn test_membership_and_mappings() {
        let replacer = replacer(&[("\\pi", "π"), ("\\tau", "τ")]);
        assert!(replacer.is_valid_sequence("\\pi"));
        assert!(!replacer.is_valid_sequence("\\p"));
        assert!(!replacer.is_valid_sequence("pi"));

        let mut mappings = replacer.get_all_mappings();
        assert_eq!(mappings.get("\\tau").map(String::as_str), Some("τ"));
        mappings.insert("\\phi".to_string(), "ϕ".to_string());
        mappings.shift_remove("\\pi");
        assert_eq!(replacer.get_all_mappings().len(), 2);
        assert!(replacer.is_valid_sequence("\\pi"));
    }
}
