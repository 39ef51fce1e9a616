use super::error::ParseError;
use super::lines::{LineFields, content_lines, io_error};
use crate::core::models::mutation::MutationCandidate;
use crate::core::models::record::ResidueKey;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One line of a `.pop` detail file: a single candidate substitution.
#[derive(Debug, Clone, PartialEq)]
pub struct PopEntry {
    pub chain: String,
    pub position: isize,
    pub wild_type: String,
    pub mutant: String,
    pub secondary_structure: String,
    pub candidate: MutationCandidate,
}

impl PopEntry {
    pub fn key(&self) -> ResidueKey {
        ResidueKey::new(self.chain.clone(), self.position)
    }
}

/// Reader for the `.pop` detail format.
///
/// Each content line holds seven whitespace-separated fields:
/// `chain position wildtype mutant secondary_structure solvent_accessibility ddG`.
pub struct PopFile;

impl PopFile {
    pub const EXTENSION: &'static str = "pop";

    /// Reads all entries from a buffered reader; `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Fails on the first line with the wrong field count or a non-numeric position,
    /// solvent accessibility or ddG. No entries are returned in that case.
    pub fn read_from(
        reader: &mut impl BufRead,
        origin: &Path,
    ) -> Result<Vec<PopEntry>, ParseError> {
        let mut entries = Vec::new();
        for line_res in content_lines(reader, origin) {
            let line = line_res?;
            let fields = LineFields::new(origin, &line);
            let [chain, position, wild_type, mutant, ss, sa, ddg] = fields.split::<7>()?;

            entries.push(PopEntry {
                chain: chain.to_string(),
                position: fields.int("position", position)?,
                wild_type: wild_type.to_string(),
                mutant: mutant.to_string(),
                secondary_structure: ss.to_string(),
                candidate: MutationCandidate::new(
                    fields.float("solvent_accessibility", sa)?,
                    fields.float("ddG", ddg)?,
                ),
            });
        }
        Ok(entries)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PopEntry>, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut reader = BufReader::new(file);
        let entries = Self::read_from(&mut reader, path)?;
        debug!("Read {} mutation entries from {:?}", entries.len(), path);
        Ok(entries)
    }
}

/// Candidate substitutions grouped by residue, ready to be attached to summary records.
#[derive(Debug, Clone, Default)]
pub struct MutationIndex {
    by_residue: HashMap<ResidueKey, BTreeMap<String, MutationCandidate>>,
}

impl MutationIndex {
    /// Groups entries by `(chain, position)`. When the same mutant appears more than once
    /// for a residue, the entry that comes later in file order wins.
    pub fn build(entries: impl IntoIterator<Item = PopEntry>) -> Self {
        let mut by_residue: HashMap<ResidueKey, BTreeMap<String, MutationCandidate>> =
            HashMap::new();
        for entry in entries {
            by_residue
                .entry(entry.key())
                .or_default()
                .insert(entry.mutant, entry.candidate);
        }
        Self { by_residue }
    }

    /// Mutations recorded for a residue; empty when the detail file has none.
    pub fn mutations_for(&self, key: &ResidueKey) -> BTreeMap<String, MutationCandidate> {
        self.by_residue.get(key).cloned().unwrap_or_default()
    }

    pub fn residue_count(&self) -> usize {
        self.by_residue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::error::ParseErrorKind;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<PopEntry>, ParseError> {
        PopFile::read_from(&mut Cursor::new(input), Path::new("test.pop"))
    }

    #[test]
    fn read_from_parses_all_seven_fields() {
        let entries = read("# chain pos wt mt ss sa ddG\nA 12 ALA VAL H 0.28 -0.90\n").unwrap();
        assert_eq!(
            entries,
            vec![PopEntry {
                chain: "A".into(),
                position: 12,
                wild_type: "ALA".into(),
                mutant: "VAL".into(),
                secondary_structure: "H".into(),
                candidate: MutationCandidate::new(0.28, -0.90),
            }]
        );
    }

    #[test]
    fn read_from_rejects_wrong_field_count() {
        let err = read("A 12 ALA VAL H 0.28\n").unwrap_err();
        match err {
            ParseError::Malformed { file, line, kind, .. } => {
                assert_eq!(file, Path::new("test.pop"));
                assert_eq!(line, 1);
                assert_eq!(kind, ParseErrorKind::FieldCount { expected: 7, found: 6 });
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn read_from_rejects_non_numeric_values() {
        assert!(matches!(
            read("A twelve ALA VAL H 0.28 -0.90\n"),
            Err(ParseError::Malformed { kind: ParseErrorKind::InvalidInt { .. }, .. })
        ));
        assert!(matches!(
            read("A 12 ALA VAL H 0.28 low\n"),
            Err(ParseError::Malformed { kind: ParseErrorKind::InvalidFloat { field: "ddG", .. }, .. })
        ));
    }

    #[test]
    fn read_from_path_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.pop");
        assert!(matches!(
            PopFile::read_from_path(&missing),
            Err(ParseError::Io { file, .. }) if file == missing
        ));
    }

    #[test]
    fn index_groups_by_residue_and_later_duplicates_win() {
        let entries = read(
            "A 12 ALA VAL H 0.28 -0.90\n\
             A 12 ALA GLY H 0.40 0.20\n\
             A 13 SER THR E 0.10 0.05\n\
             A 12 ALA VAL H 0.30 -1.10\n",
        )
        .unwrap();
        let index = MutationIndex::build(entries);
        assert_eq!(index.residue_count(), 2);

        let at_12 = index.mutations_for(&ResidueKey::new("A", 12));
        assert_eq!(at_12.len(), 2);
        assert_eq!(at_12["VAL"], MutationCandidate::new(0.30, -1.10));
        assert_eq!(at_12["GLY"], MutationCandidate::new(0.40, 0.20));
    }

    #[test]
    fn index_distinguishes_chains_with_same_position() {
        let entries = read("A 5 LEU ILE H 0.1 -0.2\nB 5 LEU MET H 0.1 -0.3\n").unwrap();
        let index = MutationIndex::build(entries);
        let a = index.mutations_for(&ResidueKey::new("A", 5));
        let b = index.mutations_for(&ResidueKey::new("B", 5));
        assert_eq!(a.keys().collect::<Vec<_>>(), vec!["ILE"]);
        assert_eq!(b.keys().collect::<Vec<_>>(), vec!["MET"]);
    }

    #[test]
    fn index_returns_empty_map_for_unknown_residue() {
        let index = MutationIndex::build(Vec::new());
        assert!(index.mutations_for(&ResidueKey::new("A", 1)).is_empty());
    }
}
