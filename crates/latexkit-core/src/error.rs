//! Error types for mapping tables and cursor replacement.

use thiserror::Error;

/// Errors raised while building or validating a [`MappingTable`].
///
/// [`MappingTable`]: crate::mapping::MappingTable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A sequence was the empty string.
    #[error("Mapping sequences must not be empty")]
    EmptySequence,
    /// A sequence mapped to the empty string.
    #[error("Replacement for '{sequence}' must not be empty")]
    EmptyReplacement { sequence: String },
    /// The same sequence was listed twice.
    #[error("Duplicate sequence '{sequence}'")]
    DuplicateSequence { sequence: String },
    /// The candidate order names a sequence the table does not contain.
    #[error("Ordered sequence '{sequence}' has no mapping")]
    UnknownSequence { sequence: String },
    /// A table key is absent from the candidate order.
    #[error("Sequence '{sequence}' is missing from the candidate order")]
    MissingFromOrder { sequence: String },
    /// A shorter sequence was ordered before a longer one.
    #[error("Candidate order places '{shorter}' before longer sequence '{longer}'")]
    OrderViolation { shorter: String, longer: String },
}

/// Errors that can occur while matching or replacing at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// The cursor lies outside `0..=rune_count(text)`.
    #[error("Invalid cursor position {position} (max: {max})")]
    InvalidCursorPosition { position: usize, max: usize },
    /// A candidate sequence had no replacement in the table.
    ///
    /// This is a defect in the table, never a user error.
    #[error("Internal error: matched sequence '{sequence}' has no replacement")]
    MissingReplacement { sequence: String },
    /// The mapping table could not be built.
    #[error("Mapping table error: {0}")]
    Mapping(#[from] MappingError),
}

impl ReplaceError {
    /// Create an invalid cursor position error.
    pub fn invalid_cursor_position(position: usize, max: usize) -> Self {
        ReplaceError::InvalidCursorPosition { position, max }
    }

    /// Create a missing replacement error.
    pub fn missing_replacement(sequence: &str) -> Self {
        ReplaceError::MissingReplacement {
            sequence: sequence.to_string(),
        }
    }

    /// Whether this error indicates a broken table rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ReplaceError::MissingReplacement { .. } | ReplaceError::Mapping(_)
        )
    }
}

/// Result type for replacement operations.
pub type ReplaceResult<T> = Result<T, ReplaceError>;

/// Result type for mapping table construction.
pub type MappingResult<T> = Result<T, MappingError>;
