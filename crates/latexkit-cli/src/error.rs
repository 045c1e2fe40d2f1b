use latexkit_core::{MappingError, ReplaceError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Replacement error: {0}")]
    Replace(#[from] ReplaceError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Mapping file not found: {0}")]
    MappingFileNotFound(PathBuf),

    #[error("Invalid mapping file: {0}")]
    InvalidMappingFile(String),

    #[error("Mapping table error: {0}")]
    Mapping(#[from] MappingError),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
