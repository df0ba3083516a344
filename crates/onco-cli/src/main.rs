//! Vocabulary resolution CLI.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{run_filters, run_resolve, run_search};
use crate::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());

    let result = match &cli.command {
        Command::Search(args) => run_search(&cli.data_dir, args),
        Command::Resolve(args) => run_resolve(&cli.data_dir, args),
        Command::Filters(args) => run_filters(&cli.data_dir, args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
