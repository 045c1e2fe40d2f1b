use latexkit_core::wasm::{mappings, WasmReplacement};
use latexkit_core::{display_width, MappingTable, Replacer, ReplacerConfig};
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::{Cli, Commands, ReplaceRequest};
use crate::config::MappingFile;
use crate::error::Result;

/// Exit code for `check` when the sequence is unknown.
pub const EXIT_INVALID_SEQUENCE: i32 = 2;

/// Build the replacer described by the global options.
pub fn build_replacer(cli: &Cli) -> Result<Replacer> {
    let table = match &cli.mappings {
        Some(path) => {
            let file = MappingFile::from_file(path)?;
            file.validate()?;
            debug!(
                "loaded {} mappings from {} (defaults: {})",
                file.mappings.len(),
                path.display(),
                file.include_defaults
            );
            file.into_table()?
        }
        None => MappingTable::latex(),
    };

    let config = ReplacerConfig {
        strategy: cli.strategy.into(),
    };
    debug!("using {:?} over {} sequences", config.strategy, table.len());
    Ok(Replacer::with_config(Arc::new(table), config))
}

/// Run the parsed command, returning the process exit code.
pub fn run<R: Read, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> Result<i32> {
    let replacer = build_replacer(cli)?;

    match &cli.command {
        Commands::Replace { text, cursor, json } => {
            let request = ReplaceRequest::resolve(text.as_deref(), *cursor, *json, stdin)?;
            replace(&replacer, &request, out)?;
        }
        Commands::List { json } => list(&replacer, *json, out)?,
        Commands::Check { sequence } => {
            if !check(&replacer, sequence, out)? {
                return Ok(EXIT_INVALID_SEQUENCE);
            }
        }
    }

    Ok(0)
}

fn replace<W: Write>(replacer: &Replacer, request: &ReplaceRequest, out: &mut W) -> Result<()> {
    let result = replacer.try_replace(&request.text, request.cursor)?;

    match &result {
        Some(replacement) => info!(
            "replaced '{}' with '{}'",
            replacement.replaced.from, replacement.replaced.to
        ),
        None => info!("no sequence before cursor {}", request.cursor),
    }

    if request.json {
        let result = result.map(WasmReplacement::from);
        serde_json::to_writer(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        let text = result
            .as_ref()
            .map(|replacement| replacement.new_text.as_str())
            .unwrap_or(&request.text);
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn list<W: Write>(replacer: &Replacer, json: bool, out: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &mappings(replacer))?;
        writeln!(out)?;
        return Ok(());
    }

    let table = replacer.table();
    let column = table
        .iter()
        .map(|(sequence, _)| display_width(sequence))
        .max()
        .unwrap_or(0);

    for (sequence, replacement) in table.iter() {
        let pad = column - display_width(sequence);
        writeln!(out, "{sequence}{:pad$}  {replacement}", "")?;
    }
    Ok(())
}

fn check<W: Write>(replacer: &Replacer, sequence: &str, out: &mut W) -> Result<bool> {
    let valid = replacer.is_valid_sequence(sequence);
    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}
