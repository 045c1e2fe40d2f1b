use clap::{Parser, Subcommand, ValueEnum};
use latexkit_core::{rune_count, MatchStrategy, ReplaceError};
use std::io::Read;
use std::path::PathBuf;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "latexkit")]
#[command(about = "Replace LaTeX escape sequences before a cursor with Unicode characters")]
#[command(version)]
pub struct Cli {
    /// Mapping file (YAML or JSON)
    #[arg(long, global = true)]
    pub mappings: Option<PathBuf>,

    /// Candidate search strategy
    #[arg(long, global = true, value_enum, default_value_t = StrategyArg::Ordered)]
    pub strategy: StrategyArg,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the sequence ending at the cursor
    Replace {
        /// Input text (read from stdin when omitted)
        #[arg(long)]
        text: Option<String>,

        /// Cursor position in characters (defaults to end of text)
        #[arg(long)]
        cursor: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every known sequence
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a sequence is known
    Check {
        /// Sequence to look up
        sequence: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Ordered,
    SuffixTrie,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Ordered => MatchStrategy::Ordered,
            StrategyArg::SuffixTrie => MatchStrategy::SuffixTrie,
        }
    }
}

/// Resolved input for the `replace` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRequest {
    pub text: String,
    pub cursor: usize,
    pub json: bool,
}

impl ReplaceRequest {
    /// Resolve text and cursor, reading `stdin` only when `--text` is absent.
    ///
    /// A single trailing line ending is dropped from stdin input.
    pub fn resolve<R: Read>(
        text: Option<&str>,
        cursor: Option<usize>,
        json: bool,
        mut stdin: R,
    ) -> Result<Self> {
        let text = match text {
            Some(text) => text.to_string(),
            None => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf)?;
                Self::strip_line_ending(buf)
            }
        };

        let max = rune_count(&text);
        let cursor = cursor.unwrap_or(max);
        if cursor > max {
            return Err(ReplaceError::invalid_cursor_position(cursor, max).into());
        }

        Ok(Self { text, cursor, json })
    }

    fn strip_line_ending(mut text: String) -> String {
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        text
    }
}
