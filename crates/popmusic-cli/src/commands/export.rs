use super::load_results;
use crate::cli::ExportArgs;
use crate::config::{CliOverrides, PartialSessionConfig};
use crate::error::Result;
use popmusic::core::models::results::ParsedResultSet;
use popmusic::engine::annotation::{ANNOTATED_FIELDS, annotation_values};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        annotation_prefix: args.prefix.clone(),
        ..Default::default()
    };
    let config = PartialSessionConfig::load(config_path)?.merge_with_cli(&overrides)?;
    let results = load_results(&args.input)?;

    let mut writer = csv::Writer::from_path(&args.output)?;
    write_annotations(&results, &config.annotation_prefix, &mut writer)?;
    writer.flush()?;

    info!(
        "Exported {} residues to {:?}.",
        results.len(),
        args.output
    );
    println!("Wrote {} residues to {}", results.len(), args.output.display());
    Ok(())
}

/// Writes a header followed by one row per residue with every annotation value.
pub fn write_annotations<W: Write>(
    results: &ParsedResultSet,
    prefix: &str,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    let mut header = vec![
        "chain".to_string(),
        "position".to_string(),
        "residue_type".to_string(),
    ];
    header.extend(ANNOTATED_FIELDS.iter().map(|f| format!("{}{}", prefix, f)));
    writer.write_record(&header)?;

    for record in results {
        let mut row = vec![
            record.chain.clone(),
            record.position.to_string(),
            record.residue_type.clone(),
        ];
        row.extend(
            annotation_values(record, prefix)
                .into_iter()
                .map(|(_, value)| value.to_string()),
        );
        writer.write_record(&row)?;
    }
    Ok(())
}
