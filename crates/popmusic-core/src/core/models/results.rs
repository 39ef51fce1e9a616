use super::record::ResidueRecord;

/// Residue records in the order they appear in the `.pops` summary file.
///
/// The order is load-bearing: records are matched position-for-position against the
/// residues of a host structure, which must therefore be supplied in the same
/// (ascending sequence) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedResultSet {
    records: Vec<ResidueRecord>,
}

impl ParsedResultSet {
    pub fn new(records: Vec<ResidueRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ResidueRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResidueRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ResidueRecord> {
        self.records.get(index)
    }

    pub fn find(&self, chain: &str, position: isize) -> Option<&ResidueRecord> {
        self.index_of(chain, position).map(|i| &self.records[i])
    }

    /// Index of the record for `(chain, position)`, which is also the index of the host
    /// residue it is paired with.
    pub fn index_of(&self, chain: &str, position: isize) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.chain == chain && r.position == position)
    }
}

impl<'a> IntoIterator for &'a ParsedResultSet {
    type Item = &'a ResidueRecord;
    type IntoIter = std::slice::Iter<'a, ResidueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(chain: &str, position: isize, residue_type: &str) -> ResidueRecord {
        ResidueRecord {
            chain: chain.to_string(),
            position,
            residue_type: residue_type.to_string(),
            secondary_structure: "C".to_string(),
            solvent_accessibility: 0.0,
            delta_g: 0.0,
            negative_score: 0.0,
            positive_score: 0.0,
            mutations: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_set_reports_zero_length() {
        let set = ParsedResultSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.get(0).is_none());
    }

    #[test]
    fn preserves_insertion_order() {
        let set = ParsedResultSet::new(vec![record("A", 2, "GLY"), record("A", 1, "ALA")]);
        let positions: Vec<_> = set.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![2, 1]);
    }

    #[test]
    fn find_matches_on_chain_and_position() {
        let set = ParsedResultSet::new(vec![record("A", 1, "ALA"), record("B", 1, "SER")]);
        assert_eq!(set.find("B", 1).map(|r| r.residue_type.as_str()), Some("SER"));
        assert!(set.find("C", 1).is_none());
    }

    #[test]
    fn index_of_reports_sequence_index() {
        let set = ParsedResultSet::new(vec![record("A", 7, "ALA"), record("A", 9, "SER")]);
        assert_eq!(set.index_of("A", 9), Some(1));
        assert_eq!(set.index_of("A", 8), None);
    }
}
