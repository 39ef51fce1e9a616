use super::error::{ParseError, ParseErrorKind};
use super::lines::{LineFields, content_lines, io_error};
use super::pop::{MutationIndex, PopFile};
use crate::core::models::record::{ResidueKey, ResidueRecord};
use crate::core::models::results::ParsedResultSet;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reader for the `.pops` summary format.
///
/// Each content line holds eight whitespace-separated fields:
/// `chain position residue secondary_structure solvent_accessibility ddG negative positive`.
pub struct PopsFile;

impl PopsFile {
    pub const EXTENSION: &'static str = "pops";

    /// Reads the summary lines and attaches the matching detail entries from `mutations`.
    ///
    /// Records keep the order of the summary file. A residue without detail entries gets
    /// an empty mutation map. Each `(chain, position)` may appear only once.
    pub fn read_from(
        reader: &mut impl BufRead,
        origin: &Path,
        mutations: &MutationIndex,
    ) -> Result<ParsedResultSet, ParseError> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for line_res in content_lines(reader, origin) {
            let line = line_res?;
            let fields = LineFields::new(origin, &line);
            let [chain, position, residue_type, ss, sa, ddg, neg, pos] = fields.split::<8>()?;

            let position = fields.int("position", position)?;
            let key = ResidueKey::new(chain, position);
            if seen.contains(&key) {
                return Err(fields.malformed(ParseErrorKind::DuplicateResidue { key }));
            }
            let solvent_accessibility = fields.float("solvent_accessibility", sa)?;
            let delta_g = fields.float("ddG", ddg)?;
            let negative_score = fields.float("negative_score", neg)?;
            let positive_score = fields.float("positive_score", pos)?;

            records.push(ResidueRecord {
                chain: chain.to_string(),
                position,
                residue_type: residue_type.to_string(),
                secondary_structure: ss.to_string(),
                solvent_accessibility,
                delta_g,
                negative_score,
                positive_score,
                mutations: mutations.mutations_for(&key),
            });
            seen.insert(key);
        }
        Ok(ParsedResultSet::new(records))
    }

    pub fn read_from_path<P: AsRef<Path>>(
        path: P,
        mutations: &MutationIndex,
    ) -> Result<ParsedResultSet, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, path, mutations)
    }
}

/// Loads a complete result set from a `.pops` summary file and its `.pop` detail file.
///
/// The detail file is read and closed before the summary file is opened.
///
/// # Errors
///
/// Returns [`ParseError`] for the first unreadable file or malformed line; there is no
/// partial result.
pub fn read_result_set(
    summary_path: impl AsRef<Path>,
    detail_path: impl AsRef<Path>,
) -> Result<ParsedResultSet, ParseError> {
    let index = MutationIndex::build(PopFile::read_from_path(detail_path)?);
    let results = PopsFile::read_from_path(summary_path.as_ref(), &index)?;
    debug!(
        "Reconciled {} residue records ({} residues with mutation data)",
        results.len(),
        index.residue_count()
    );
    Ok(results)
}
