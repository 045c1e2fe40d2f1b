pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Commands, ReplaceRequest, StrategyArg};
pub use commands::{build_replacer, run, EXIT_INVALID_SEQUENCE};
pub use config::{MappingEntry, MappingFile};
pub use error::{CliError, ConfigError, Result};
