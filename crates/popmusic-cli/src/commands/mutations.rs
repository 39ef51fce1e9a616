use super::load_results;
use crate::cli::MutationsArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_residue_key;
use popmusic::core::models::record::ResidueRecord;
use popmusic::core::utils::identifiers::mutation_notation;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: MutationsArgs) -> Result<()> {
    let key = parse_residue_key(&args.residue)?;
    let results = load_results(&args.input)?;
    let record = results
        .find(&key.chain, key.position)
        .ok_or_else(|| CliError::Argument(format!("Residue {} is not in the results", key)))?;

    info!(
        "Residue {} has {} candidate mutations.",
        key,
        record.mutations.len()
    );
    let stdout = io::stdout();
    write_mutations(record, &mut stdout.lock())?;
    Ok(())
}

/// Writes the candidate table of one residue, ordered by mutant code.
pub fn write_mutations(record: &ResidueRecord, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", record.label())?;
    if record.mutations.is_empty() {
        writeln!(out, "  (no candidate mutations)")?;
        return Ok(());
    }
    writeln!(out, "{:<8} {:<10} {:>8} {:>8}", "Mutant", "Notation", "SASA", "ddG")?;
    for (mutant, candidate) in &record.mutations {
        writeln!(
            out,
            "{:<8} {:<10} {:>8.2} {:>8.2}",
            mutant,
            mutation_notation(&record.residue_type, record.position, mutant),
            candidate.solvent_accessibility,
            candidate.delta_g
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::write_fixture;

    #[test]
    fn lists_candidates_in_mutant_order() {
        let dir = tempfile::tempdir().unwrap();
        let results = load_results(&write_fixture(dir.path())).unwrap();
        let record = results.find("A", 12).unwrap();

        let mut out = Vec::new();
        write_mutations(record, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], ":12.A ALA");
        assert!(lines[2].starts_with("GLY") && lines[2].contains("A12G"));
        assert!(lines[3].starts_with("VAL") && lines[3].contains("-0.90"));
    }

    #[test]
    fn record_without_candidates_says_so() {
        let record = ResidueRecord {
            chain: "B".into(),
            position: 3,
            residue_type: "GLY".into(),
            secondary_structure: "C".into(),
            solvent_accessibility: 0.5,
            delta_g: 0.0,
            negative_score: 0.0,
            positive_score: 0.0,
            mutations: Default::default(),
        };
        let mut out = Vec::new();
        write_mutations(&record, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("no candidate"));
    }
}
