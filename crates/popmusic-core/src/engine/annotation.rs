use super::host::{HostResidue, HostStructure};
use crate::core::models::record::ResidueRecord;
use crate::core::models::results::ParsedResultSet;

pub const DEFAULT_ANNOTATION_PREFIX: &str = "popmusic_";

/// Names of the numeric record fields written onto host residues, in output order.
pub const ANNOTATED_FIELDS: [&str; 4] = [
    "solvent_accessibility",
    "ddG",
    "negative_score",
    "positive_score",
];

/// The `(key, value)` annotations for one record, keys prefixed with `prefix`.
pub fn annotation_values(record: &ResidueRecord, prefix: &str) -> Vec<(String, f64)> {
    let values = [
        record.solvent_accessibility,
        record.delta_g,
        record.negative_score,
        record.positive_score,
    ];
    ANNOTATED_FIELDS
        .iter()
        .zip(values)
        .map(|(field, value)| (format!("{}{}", prefix, field), value))
        .collect()
}

/// Writes the numeric fields of every record onto the host residue at the same index.
///
/// Callers must have validated `structure` against `results`; the public entry point is
/// [`Session`](crate::workflows::session::Session), which only exists after validation.
pub(crate) fn copy_attributes<S>(results: &ParsedResultSet, structure: &mut S, prefix: &str)
where
    S: HostStructure + ?Sized,
{
    for (record, residue) in results.iter().zip(structure.residues_mut()) {
        for (key, value) in annotation_values(record, prefix) {
            residue.set_annotation(&key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pop::MutationIndex;
    use crate::core::io::pops::PopsFile;
    use crate::engine::host::testing::structure;
    use std::io::Cursor;
    use std::path::Path;

    fn results(summary: &str) -> ParsedResultSet {
        PopsFile::read_from(
            &mut Cursor::new(summary),
            Path::new("t.pops"),
            &MutationIndex::default(),
        )
        .unwrap()
    }

    #[test]
    fn annotation_values_cover_float_fields_only() {
        let r = results("A 12 ALA H 0.31 -0.40 -0.10 -0.35\n");
        let values = annotation_values(r.get(0).unwrap(), DEFAULT_ANNOTATION_PREFIX);
        assert_eq!(
            values,
            vec![
                ("popmusic_solvent_accessibility".to_string(), 0.31),
                ("popmusic_ddG".to_string(), -0.40),
                ("popmusic_negative_score".to_string(), -0.10),
                ("popmusic_positive_score".to_string(), -0.35),
            ]
        );
    }

    #[test]
    fn annotation_values_respect_custom_prefix() {
        let r = results("A 12 ALA H 0.31 -0.40 -0.10 -0.35\n");
        let keys: Vec<_> = annotation_values(r.get(0).unwrap(), "pm_")
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(keys.iter().all(|k| k.starts_with("pm_")));
    }

    #[test]
    fn copy_attributes_writes_each_record_onto_matching_residue() {
        let r = results("A 1 ALA H 0.1 -0.2 -0.3 -0.4\nA 2 GLY C 0.5 0.6 0.7 0.8\n");
        let mut s = structure(&[("A", 1, "ALA"), ("A", 2, "GLY")]);
        copy_attributes(&r, &mut s, DEFAULT_ANNOTATION_PREFIX);

        assert_eq!(s[0].annotations.len(), 4);
        assert_eq!(s[0].annotations["popmusic_ddG"], -0.2);
        assert_eq!(s[1].annotations["popmusic_solvent_accessibility"], 0.5);
        assert_eq!(s[1].annotations["popmusic_positive_score"], 0.8);
        assert!(!s[0].annotations.contains_key("popmusic_position"));
        assert!(!s[0].annotations.contains_key("popmusic_mutations"));
    }

    #[test]
    fn copy_attributes_does_not_modify_results() {
        let r = results("A 1 ALA H 0.1 -0.2 -0.3 -0.4\n");
        let before = r.clone();
        let mut s = structure(&[("A", 1, "ALA")]);
        copy_attributes(&r, &mut s, DEFAULT_ANNOTATION_PREFIX);
        assert_eq!(r, before);
    }
}
