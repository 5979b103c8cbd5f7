use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, warn};

#[derive(Parser)]
#[command(name = "cleanme")]
#[command(version)]
#[command(
    about = "Remove build and install artifacts from the repository",
    long_about = "Remove build and install artifacts from the repository.\n\n\
        Every target is removed on a best-effort basis: missing or unremovable \
        targets are skipped and the command always exits successfully."
)]
struct Cli {
    /// Clean relative to this directory instead of the current one
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Log each removal attempt to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.directory {
        Some(root) => cleanme::clean_in(&root),
        None => cleanme::clean(),
    };
    if let Err(error) = result {
        warn!(%error, "could not determine the directory to clean");
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
