//! LaTeX Autocorrect Core Library
//!
//! This crate provides the matching and replacement logic behind "autocorrect
//! while typing" for LaTeX-style escape sequences. Given a text buffer and a
//! cursor, the [`Replacer`] finds the longest known sequence ending exactly at
//! the cursor and swaps it for its Unicode replacement. Mapping tables are
//! immutable values injected at construction so editors can share them.

pub mod mapping;
pub mod replacer;
pub mod sequence_matcher;
pub mod wasm;

// Text and cursor modules
pub mod document;
pub mod error;
pub mod unicode;

// Re-export commonly used types for convenience
pub use document::Document;
pub use error::{MappingError, MappingResult, ReplaceError, ReplaceResult};
pub use mapping::{MappingTable, MappingTableBuilder, LATEX_SYMBOLS};
pub use replacer::{
    MatchStrategy, ReplacedSequence, Replacement, Replacer, ReplacerConfig, SequenceMatch,
};
pub use sequence_matcher::{MatchResult, SuffixMatch, SuffixMatcher};
pub use unicode::{byte_index_from_rune_index, display_width, rune_count, rune_slice};

// Re-export WASM serialization types when wasm feature is enabled
#[cfg(feature = "wasm")]
pub use wasm::{
    find_sequence_json, try_replace_json, WasmMapping, WasmReplaced, WasmReplacement,
    WasmSequenceMatch,
};
