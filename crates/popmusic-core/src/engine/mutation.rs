use super::criteria::Criteria;
use super::error::EngineError;
use super::host::{HostResidue, HostStructure};
use super::progress::{Progress, ProgressReporter};
use super::selection::{FavourableMutation, SelectionMode, select_favourable_mutations};
use crate::core::models::mutation::MutationCandidate;
use crate::core::models::record::ResidueKey;
use crate::core::models::results::ParsedResultSet;
use crate::core::utils::identifiers::mutation_notation;
use tracing::{debug, info};

pub type PlacementFailure = Box<dyn std::error::Error + Send + Sync>;

/// An owned record of a substitution that was handed to the placer successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMutation {
    pub key: ResidueKey,
    pub wild_type: String,
    pub mutant: String,
    pub candidate: Option<MutationCandidate>, // None when the mutant had no prediction
}

impl AppliedMutation {
    pub fn notation(&self) -> String {
        mutation_notation(&self.wild_type, self.key.position, &self.mutant)
    }
}

impl From<&FavourableMutation<'_>> for AppliedMutation {
    fn from(m: &FavourableMutation<'_>) -> Self {
        Self {
            key: m.record.key(),
            wild_type: m.record.residue_type.clone(),
            mutant: m.mutant.to_string(),
            candidate: Some(m.candidate),
        }
    }
}

/// The host routine that builds a substituted side chain and picks its best rotamer.
pub trait RotamerPlacer<R: HostResidue + ?Sized> {
    /// Replaces `residue` with `mutant` (3-letter code), ranking rotamers by `criteria`.
    fn place_best_rotamer(
        &mut self,
        residue: &mut R,
        mutant: &str,
        criteria: &Criteria,
    ) -> Result<(), PlacementFailure>;
}

/// Applies one substitution through `placer` and shows the residue's atoms on success.
///
/// # Errors
///
/// Returns [`EngineError::MutationApplication`] wrapping the placer's error. The residue
/// display state is left untouched in that case.
pub fn apply_mutation<R, P>(
    residue: &mut R,
    mutant: &str,
    criteria: &Criteria,
    placer: &mut P,
) -> Result<(), EngineError>
where
    R: HostResidue + ?Sized,
    P: RotamerPlacer<R> + ?Sized,
{
    debug!(
        "Placing {} at {}:{} with criteria '{}'",
        mutant,
        residue.chain_id(),
        residue.position(),
        criteria
    );
    placer
        .place_best_rotamer(residue, mutant, criteria)
        .map_err(|source| EngineError::MutationApplication {
            key: ResidueKey::new(residue.chain_id(), residue.position()),
            mutant: mutant.to_string(),
            source,
        })?;
    residue.set_atoms_displayed(true);
    Ok(())
}

/// Selects favourable mutations under `mode` and applies each, in record order.
///
/// Each record is paired with the host residue at the same index, the alignment
/// [`validate`](super::validation::validate) checks, so callers must have validated
/// `structure` against `results`. The public entry point is
/// [`Session`](crate::workflows::session::Session). Application stops at the first
/// failure; mutations applied before it remain in place.
pub(crate) fn apply_favourable_mutations<'r, S, P>(
    results: &'r ParsedResultSet,
    structure: &mut S,
    mode: SelectionMode,
    criteria: &Criteria,
    placer: &mut P,
    reporter: &ProgressReporter,
) -> Result<Vec<FavourableMutation<'r>>, EngineError>
where
    S: HostStructure + ?Sized,
    P: RotamerPlacer<S::Residue> + ?Sized,
{
    let selected = select_favourable_mutations(results, mode);
    info!(
        "Applying {} favourable mutation(s) ({} selection).",
        selected.len(),
        mode
    );
    reporter.report(Progress::MutationsSelected {
        total: selected.len(),
    });

    for mutation in &selected {
        let residue = structure
            .residue_mut(mutation.index)
            .ok_or_else(|| EngineError::ResidueNotFound {
                key: mutation.record.key(),
            })?;
        apply_mutation(residue, mutation.mutant, criteria, placer)?;
        reporter.report(Progress::MutationApplied {
            index: mutation.index,
            notation: mutation.notation(),
            delta_g: mutation.candidate.delta_g,
        });
    }
    reporter.report(Progress::Finished {
        applied: selected.len(),
    });

    Ok(selected)
}
