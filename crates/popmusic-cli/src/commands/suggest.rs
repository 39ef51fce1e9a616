use super::load_results;
use crate::cli::SuggestArgs;
use crate::config::{CliOverrides, PartialSessionConfig};
use crate::error::Result;
use popmusic::engine::config::SessionConfig;
use popmusic::engine::selection::{FavourableMutation, SelectionMode, select_favourable_mutations};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: SuggestArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides = CliOverrides {
        selection_mode: args.all.then_some(SelectionMode::All),
        criteria: args.criteria.clone(),
        ..Default::default()
    };
    let config = PartialSessionConfig::load(config_path)?.merge_with_cli(&overrides)?;
    let results = load_results(&args.input)?;

    let suggestions = select_favourable_mutations(&results, config.selection_mode);
    info!(
        "Selected {} favourable mutations ({} selection).",
        suggestions.len(),
        config.selection_mode
    );

    let stdout = io::stdout();
    write_suggestions(&suggestions, &config, &mut stdout.lock())?;
    Ok(())
}

pub fn write_suggestions(
    suggestions: &[FavourableMutation<'_>],
    config: &SessionConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No favourable mutations found.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<14} {:<10} {:>8} {:>8}  {}",
        "Residue", "Mutation", "ddG", "SASA", "Criteria"
    )?;
    for mutation in suggestions {
        writeln!(
            out,
            "{:<14} {:<10} {:>8.2} {:>8.2}  {}",
            mutation.record.label(),
            mutation.notation(),
            mutation.candidate.delta_g,
            mutation.candidate.solvent_accessibility,
            config.criteria
        )?;
    }
    Ok(())
}
