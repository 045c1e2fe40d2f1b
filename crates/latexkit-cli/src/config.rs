use latexkit_core::MappingTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// A user-supplied mapping file.
///
/// ```yaml
/// version: 1
/// include_defaults: true
/// mappings:
///   - sequence: "\\qed"
///     replacement: "∎"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingFile {
    pub version: u32,
    #[serde(default = "default_include_defaults")]
    pub include_defaults: bool,
    #[serde(default)]
    pub mappings: Vec<MappingEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MappingEntry {
    pub sequence: String,
    pub replacement: String,
}

fn default_include_defaults() -> bool {
    true
}

impl MappingFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| ConfigError::MappingFileNotFound(path.as_ref().to_path_buf()))?;
        Self::from_str(&content)
    }

    /// Parse YAML first, then JSON.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let yaml_err = match serde_yaml::from_str(content) {
            Ok(file) => return Ok(file),
            Err(err) => err,
        };

        if let Ok(file) = serde_json::from_str(content) {
            return Ok(file);
        }

        Err(ConfigError::InvalidMappingFile(format!(
            "Failed to parse as YAML or JSON: {yaml_err}"
        ))
        .into())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ConfigError::InvalidMappingFile(format!(
                "Unsupported version: {}. Only version 1 is supported.",
                self.version
            ))
            .into());
        }

        if !self.include_defaults && self.mappings.is_empty() {
            return Err(ConfigError::InvalidMappingFile(
                "No mappings defined and defaults are disabled".to_string(),
            )
            .into());
        }

        let mut seen = HashSet::new();
        for (i, entry) in self.mappings.iter().enumerate() {
            entry.validate().map_err(|reason| {
                ConfigError::InvalidMappingFile(format!("Entry {i}: {reason}"))
            })?;
            if !seen.insert(entry.sequence.as_str()) {
                return Err(ConfigError::InvalidMappingFile(format!(
                    "Entry {i}: duplicate sequence '{}'",
                    entry.sequence
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Build the table this file describes, layered over the built-in
    /// table when `include_defaults` is set.
    pub fn into_table(self) -> Result<MappingTable> {
        let mut builder = MappingTable::builder();
        if self.include_defaults {
            builder = builder.extend_from(&MappingTable::latex());
        }
        for entry in self.mappings {
            builder = builder.insert(entry.sequence, entry.replacement);
        }
        let table = builder.build().map_err(ConfigError::from)?;
        Ok(table)
    }
}

impl MappingEntry {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.sequence.is_empty() {
            return Err("sequence cannot be empty".to_string());
        }
        if self.replacement.is_empty() {
            return Err(format!("replacement for '{}' cannot be empty", self.sequence));
        }
        Ok(())
    }
}
