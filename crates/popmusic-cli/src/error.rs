use popmusic::core::io::error::{FileDiscoveryError, ParseError};
use popmusic::engine::config::ConfigError;
use popmusic::engine::criteria::CriteriaError;
use popmusic::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Core(e.into())
    }
}

impl From<FileDiscoveryError> for CliError {
    fn from(e: FileDiscoveryError) -> Self {
        CliError::Core(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CriteriaError> for CliError {
    fn from(e: CriteriaError) -> Self {
        CliError::Argument(e.to_string())
    }
}

impl From<crate::utils::parser::ParseError> for CliError {
    fn from(e: crate::utils::parser::ParseError) -> Self {
        CliError::Argument(e.to_string())
    }
}
