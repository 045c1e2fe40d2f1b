//! Editor buffer state that replacements are applied to.
//!
//! A [`Document`] pairs text with a rune-indexed cursor. It is immutable:
//! applying a [`Replacement`] yields a new document.

use crate::error::{ReplaceError, ReplaceResult};
use crate::replacer::Replacement;
use crate::unicode;

/// Text content with a cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// The text content
    text: String,
    /// Cursor position as rune index (not byte index)
    cursor_position: usize,
}

impl Document {
    /// Create a new empty document.
    ///
    /// ```
    /// use latexkit_core::document::Document;
    ///
    /// let doc = Document::new();
    /// assert_eq!(doc.text(), "");
    /// assert_eq!(doc.cursor_position(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with text and a cursor position.
    ///
    /// Unlike a terminal prompt buffer the cursor is not clamped: a position
    /// past the end of the text is an error.
    ///
    /// ```
    /// use latexkit_core::document::Document;
    ///
    /// let doc = Document::with_text("\\beta x".to_string(), 5).unwrap();
    /// assert_eq!(doc.text_before_cursor(), "\\beta");
    /// assert!(Document::with_text("ab".to_string(), 3).is_err());
    /// ```
    pub fn with_text(text: String, cursor_position: usize) -> ReplaceResult<Self> {
        let max = unicode::rune_count(&text);
        if cursor_position > max {
            return Err(ReplaceError::invalid_cursor_position(cursor_position, max));
        }
        Ok(Document {
            text,
            cursor_position,
        })
    }

    /// Create a document with the cursor at the end of the text.
    pub fn at_end(text: String) -> Self {
        let cursor_position = unicode::rune_count(&text);
        Document {
            text,
            cursor_position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a rune index.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn text_before_cursor(&self) -> &str {
        unicode::rune_slice(&self.text, 0, self.cursor_position)
    }

    pub fn text_after_cursor(&self) -> &str {
        let byte_index = unicode::byte_index_from_rune_index(&self.text, self.cursor_position);
        &self.text[byte_index..]
    }

    /// The document a replacement describes.
    pub fn apply(&self, replacement: &Replacement) -> Document {
        Document {
            text: replacement.new_text.clone(),
            cursor_position: replacement.new_cursor_position,
        }
    }

    /// Consume the document, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
