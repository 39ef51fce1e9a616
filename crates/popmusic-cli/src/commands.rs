pub mod export;
pub mod mutations;
pub mod suggest;
pub mod summary;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use popmusic::core::io::discovery::ResultFiles;
use popmusic::core::models::results::ParsedResultSet;
use tracing::info;

/// Resolves the input arguments to a `.pops`/`.pop` pair and parses it.
pub(crate) fn load_results(input: &InputArgs) -> Result<ParsedResultSet> {
    let files = match (&input.directory, &input.summary, &input.detail) {
        (Some(directory), _, _) => ResultFiles::discover(directory)?,
        (None, Some(summary), Some(detail)) => ResultFiles::new(summary, detail),
        _ => {
            return Err(CliError::Argument(
                "Provide a results directory or both --summary and --detail.".to_string(),
            ));
        }
    };

    info!(
        "Loading results from {:?} and {:?}",
        files.summary, files.detail
    );
    let results = files.load()?;
    info!("Loaded {} residue records.", results.len());
    Ok(results)
}
