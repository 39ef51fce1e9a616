use super::load_results;
use crate::cli::SummaryArgs;
use crate::error::Result;
use popmusic::core::models::results::ParsedResultSet;
use std::io::{self, Write};

pub fn run(args: SummaryArgs) -> Result<()> {
    let results = load_results(&args.input)?;
    let stdout = io::stdout();
    write_summary(&results, &mut stdout.lock())?;
    Ok(())
}

/// Writes one row per residue: index, label, SASA, ddG and the two contribution scores.
pub fn write_summary(results: &ParsedResultSet, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:>5}  {:<14} {:>8} {:>8} {:>8} {:>8}",
        "#", "Residue", "SASA", "ddG", "Neg.", "Pos."
    )?;
    for (index, record) in results.iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {:<14} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            index + 1,
            record.label(),
            record.solvent_accessibility,
            record.delta_g,
            record.negative_score,
            record.positive_score
        )?;
    }
    Ok(())
}
