/// Predicted effect of substituting the wild-type residue at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationCandidate {
    pub solvent_accessibility: f64, // Solvent accessibility reported for the mutant
    pub delta_g: f64,               // Predicted folding free-energy change (ddG); negative is stabilizing
}

impl MutationCandidate {
    pub fn new(solvent_accessibility: f64, delta_g: f64) -> Self {
        Self {
            solvent_accessibility,
            delta_g,
        }
    }

    pub fn is_stabilizing(&self) -> bool {
        self.delta_g < 0.0
    }
}
