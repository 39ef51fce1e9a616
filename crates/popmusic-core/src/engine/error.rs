use thiserror::Error;

use super::validation::ValidationError;
use crate::core::io::error::{FileDiscoveryError, ParseError};
use crate::core::models::record::ResidueKey;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load PoPMuSiC results: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to locate PoPMuSiC results: {0}")]
    Discovery(#[from] FileDiscoveryError),

    #[error("Results do not match the structure: {0}")]
    Validation(#[from] ValidationError),

    #[error("Residue not found in structure: {key}")]
    ResidueNotFound { key: ResidueKey },

    #[error("Failed to mutate residue {key} to {mutant}: {source}")]
    MutationApplication {
        key: ResidueKey,
        mutant: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
