use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan",
    version,
    about = "PoPMuSiC CLI - Inspect PoPMuSiC stability predictions and their suggested mutations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the per-residue summary table.
    Summary(SummaryArgs),
    /// Print the candidate mutations predicted for one residue.
    Mutations(MutationsArgs),
    /// Print the favourable mutations that would be applied to the structure.
    Suggest(SuggestArgs),
    /// Export the residue annotations to a CSV file.
    Export(ExportArgs),
}

/// Location of the `.pops`/`.pop` pair, shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Directory containing one `.pops` summary file and one `.pop` detail file.
    #[arg(value_name = "DIR", required_unless_present_all = ["summary", "detail"], conflicts_with_all = ["summary", "detail"])]
    pub directory: Option<PathBuf>,

    /// Path to the `.pops` summary file.
    #[arg(long, value_name = "PATH", requires = "detail")]
    pub summary: Option<PathBuf>,

    /// Path to the `.pop` detail file.
    #[arg(long, value_name = "PATH", requires = "summary")]
    pub detail: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `mutations` subcommand.
#[derive(Args, Debug)]
pub struct MutationsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Residue to show, as `A:12` or in the table form `:12.A`.
    #[arg(short, long, required = true, value_name = "RESIDUE")]
    pub residue: String,
}

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Consider every residue instead of only net-destabilized ones.
    #[arg(long)]
    pub all: bool,

    /// Override the rotamer criteria passed to the placer (e.g. 'cp', 'dhcp').
    #[arg(long, value_name = "CODES")]
    pub criteria: Option<String>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the annotation prefix from the config file.
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}
