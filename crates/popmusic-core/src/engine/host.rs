//! Interfaces through which the engine reads and annotates a host molecular structure.
//!
//! The host application owns its structure model. The engine never creates attributes
//! on host objects implicitly; every write goes through [`HostResidue::set_annotation`].

/// A residue owned by the host structure.
pub trait HostResidue {
    fn chain_id(&self) -> &str;

    /// Sequence number of the residue within its chain.
    fn position(&self) -> isize;

    /// 3-letter residue code (e.g., "ALA").
    fn residue_type(&self) -> &str;

    /// Stores a numeric annotation under `key`, replacing any previous value.
    fn set_annotation(&mut self, key: &str, value: f64);

    /// Shows or hides the atoms of the residue. Hosts without a display model can ignore it.
    fn set_atoms_displayed(&mut self, _displayed: bool) {}
}

/// An ordered collection of host residues.
///
/// `residues` and `residues_mut` must yield residues in ascending sequence order, the
/// same order the PoPMuSiC summary file lists them in. Records are paired with residues
/// by that order alone; the host's own numbering is never consulted.
pub trait HostStructure {
    type Residue: HostResidue;

    fn residues(&self) -> impl Iterator<Item = &Self::Residue>;

    fn residues_mut(&mut self) -> impl Iterator<Item = &mut Self::Residue>;

    fn residue_count(&self) -> usize {
        self.residues().count()
    }

    /// The residue at `index` in sequence order.
    fn residue_mut(&mut self, index: usize) -> Option<&mut Self::Residue> {
        self.residues_mut().nth(index)
    }
}

impl<R: HostResidue> HostStructure for Vec<R> {
    type Residue = R;

    fn residues(&self) -> impl Iterator<Item = &R> {
        self.iter()
    }

    fn residues_mut(&mut self) -> impl Iterator<Item = &mut R> {
        self.iter_mut()
    }

    fn residue_count(&self) -> usize {
        self.len()
    }

    fn residue_mut(&mut self, index: usize) -> Option<&mut R> {
        self.get_mut(index)
    }
}
