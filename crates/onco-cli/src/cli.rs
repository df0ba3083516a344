//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "onco-vocab",
    version,
    about = "Resolve clinical free text and ICD-O topography codes against a controlled vocabulary"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Directory containing the vocabulary and dataset tables.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the diagnosis dataset by name and/or topography filters.
    Search(SearchArgs),

    /// Resolve free clinical text to vocabulary codes.
    Resolve(ResolveArgs),

    /// Print the cascading topography filter options.
    Filters(FiltersArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Free-text query matched against diagnosis names.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Minimum fuzzy score (0-100) for name matches.
    #[arg(long, default_value_t = 80)]
    pub threshold: u8,

    /// Keep only entries under this macrogrouping.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub macrogrouping: String,

    /// Keep only entries under this group.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub group: String,

    /// Keep only entries at this site.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub site: String,

    /// Emit the response as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Clinical free text to resolve.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Minimum fuzzy score (0-100) for term matches.
    #[arg(long, default_value_t = 80)]
    pub threshold: u8,
}

#[derive(Parser)]
pub struct FiltersArgs {
    /// Emit the options as JSON instead of a listing.
    #[arg(long)]
    pub json: bool,
}
