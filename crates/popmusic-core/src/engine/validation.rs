use super::host::{HostResidue, HostStructure};
use crate::core::models::results::ParsedResultSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Residue count mismatch: results list {expected} residues, structure has {found}")]
    ResidueCountMismatch { expected: usize, found: usize },

    #[error("Sequence mismatch at index {index}: results expect {expected}, structure has {found}")]
    SequenceMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Checks that `structure` lists the same residues as `results`, position for position.
///
/// The residue count is compared first; only when it matches are the residue types
/// compared, and the first differing index is reported.
pub fn validate<S>(results: &ParsedResultSet, structure: &S) -> Result<(), ValidationError>
where
    S: HostStructure + ?Sized,
{
    let found = structure.residue_count();
    if found != results.len() {
        return Err(ValidationError::ResidueCountMismatch {
            expected: results.len(),
            found,
        });
    }

    for (index, (record, residue)) in results.iter().zip(structure.residues()).enumerate() {
        if residue.residue_type() != record.residue_type {
            return Err(ValidationError::SequenceMismatch {
                index,
                expected: record.residue_type.clone(),
                found: residue.residue_type().to_string(),
            });
        }
    }
    Ok(())
}
