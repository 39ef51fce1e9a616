use super::mutation::MutationCandidate;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies a residue within one result set by chain and sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub chain: String,
    pub position: isize,
}

impl ResidueKey {
    pub fn new(chain: impl Into<String>, position: isize) -> Self {
        Self {
            chain: chain.into(),
            position,
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, self.position)
    }
}

/// Summary values for one residue together with its candidate substitutions.
///
/// Records are produced once by the `.pops`/`.pop` readers and never modified afterwards.
/// The `mutations` map is keyed by the 3-letter code of the mutant residue; it is ordered
/// so that every consumer observes the same iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub chain: String,
    pub position: isize,
    pub residue_type: String, // Wild-type 3-letter code (e.g., "ALA")
    pub secondary_structure: String,
    pub solvent_accessibility: f64,
    pub delta_g: f64,
    pub negative_score: f64,
    pub positive_score: f64,
    pub mutations: BTreeMap<String, MutationCandidate>,
}

impl ResidueRecord {
    pub fn key(&self) -> ResidueKey {
        ResidueKey::new(self.chain.clone(), self.position)
    }

    /// Sum of the negative and positive scores; below zero means the position is
    /// net destabilizing and therefore a candidate for conservative redesign.
    pub fn combined_score(&self) -> f64 {
        self.negative_score + self.positive_score
    }

    /// Label in the `:<position>.<chain> <type>` form used by the results tables.
    pub fn label(&self) -> String {
        format!(":{}.{} {}", self.position, self.chain, self.residue_type)
    }

    pub fn mutation(&self, mutant: &str) -> Option<&MutationCandidate> {
        self.mutations.get(mutant)
    }
}
