use crate::core::models::mutation::MutationCandidate;
use crate::core::models::record::ResidueRecord;
use crate::core::models::results::ParsedResultSet;
use crate::core::utils::identifiers::mutation_notation;
use serde::Deserialize;
use std::fmt;

/// Which residues are considered when looking for favourable mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Only residues whose negative and positive scores sum below zero.
    #[default]
    Conservative,
    /// Every residue in the result set.
    All,
}

impl SelectionMode {
    pub fn from_conservative(conservative: bool) -> Self {
        if conservative {
            SelectionMode::Conservative
        } else {
            SelectionMode::All
        }
    }

    pub fn includes(&self, record: &ResidueRecord) -> bool {
        match self {
            SelectionMode::Conservative => record.combined_score() < 0.0,
            SelectionMode::All => true,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SelectionMode::Conservative => "conservative",
                SelectionMode::All => "all",
            }
        )
    }
}

/// The lowest-ddG substitution chosen for one residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavourableMutation<'a> {
    pub index: usize, // Position of `record` in the result set
    pub record: &'a ResidueRecord,
    pub mutant: &'a str,
    pub candidate: MutationCandidate,
}

impl FavourableMutation<'_> {
    /// Compact notation such as `A12V`.
    pub fn notation(&self) -> String {
        mutation_notation(&self.record.residue_type, self.record.position, self.mutant)
    }
}

/// Lowest-ddG mutation of a record. Equal ddG values resolve to the alphabetically first
/// mutant code; NaN values are never selected.
pub fn best_mutation(record: &ResidueRecord) -> Option<(&str, &MutationCandidate)> {
    record
        .mutations
        .iter()
        .filter(|(_, candidate)| !candidate.delta_g.is_nan())
        .min_by(|(_, a), (_, b)| a.delta_g.total_cmp(&b.delta_g))
        .map(|(mutant, candidate)| (mutant.as_str(), candidate))
}

/// Selects, in record order, the best stabilizing mutation of every residue admitted by
/// `mode`. Residues with no mutations, or whose best mutation has `ddG >= 0`, are skipped.
pub fn select_favourable_mutations(
    results: &ParsedResultSet,
    mode: SelectionMode,
) -> Vec<FavourableMutation<'_>> {
    results
        .iter()
        .enumerate()
        .filter(|(_, record)| mode.includes(record))
        .filter_map(|(index, record)| {
            let (mutant, candidate) = best_mutation(record)?;
            candidate.is_stabilizing().then_some(FavourableMutation {
                index,
                record,
                mutant,
                candidate: *candidate,
            })
        })
        .collect()
}
