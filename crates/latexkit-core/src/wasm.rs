//! Serializable interop types for WASM and other JSON bridges.
//! These mirror the core result types with plain owned fields.

#[cfg(feature = "wasm")]
pub use self::wasm_impl::*;

#[cfg(feature = "wasm")]
mod wasm_impl {
    use crate::{ReplaceError, Replacement, Replacer, SequenceMatch};
    use serde::{Deserialize, Serialize};

    /// Serializable version of a replacement record
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct WasmReplaced {
        pub from: String,
        pub to: String,
    }

    /// Serializable version of Replacement
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct WasmReplacement {
        pub new_text: String,
        pub new_cursor_position: usize,
        pub replaced: WasmReplaced,
    }

    impl From<Replacement> for WasmReplacement {
        fn from(replacement: Replacement) -> Self {
            WasmReplacement {
                new_text: replacement.new_text,
                new_cursor_position: replacement.new_cursor_position,
                replaced: WasmReplaced {
                    from: replacement.replaced.from,
                    to: replacement.replaced.to,
                },
            }
        }
    }

    /// Serializable version of SequenceMatch
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct WasmSequenceMatch {
        pub sequence: String,
        pub start_index: usize,
    }

    impl From<SequenceMatch<'_>> for WasmSequenceMatch {
        fn from(found: SequenceMatch<'_>) -> Self {
            WasmSequenceMatch {
                sequence: found.sequence.to_string(),
                start_index: found.start_index,
            }
        }
    }

    /// Serializable mapping entry, used for listing a table
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct WasmMapping {
        pub sequence: String,
        pub replacement: String,
    }

    #[derive(Serialize)]
    struct WasmError {
        error: String,
    }

    fn error_json(err: &ReplaceError) -> String {
        serde_json::to_string(&WasmError {
            error: err.to_string(),
        })
        .unwrap_or_else(|_| "{\"error\":\"serialization failed\"}".to_string())
    }

    /// Run `try_replace` and encode the outcome as JSON.
    ///
    /// Produces the replacement object, `null` when nothing matched, or
    /// `{"error": "..."}`.
    pub fn try_replace_json(replacer: &Replacer, text: &str, cursor_position: usize) -> String {
        match replacer.try_replace(text, cursor_position) {
            Ok(result) => {
                let result = result.map(WasmReplacement::from);
                serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string())
            }
            Err(err) => error_json(&err),
        }
    }

    /// Run `find_sequence_before_cursor` and encode the outcome as JSON.
    pub fn find_sequence_json(replacer: &Replacer, text: &str, cursor_position: usize) -> String {
        match replacer.find_sequence_before_cursor(text, cursor_position) {
            Ok(found) => {
                let found = found.map(WasmSequenceMatch::from);
                serde_json::to_string(&found).unwrap_or_else(|_| "null".to_string())
            }
            Err(err) => error_json(&err),
        }
    }

    /// Every mapping of the replacer's table, in table order.
    pub fn mappings(replacer: &Replacer) -> Vec<WasmMapping> {
        replacer
            .table()
            .iter()
            .map(|(sequence, replacement)| WasmMapping {
                sequence: sequence.to_string(),
                replacement: replacement.to_string(),
            })
            .collect()
    }

}
