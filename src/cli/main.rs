use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main application arguments
#[derive(Parser)]
#[clap(
    version,
    about = "Capture, search, and export short study notes for one sitting"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Preload the bundled sample notes
    #[clap(long)]
    pub sample: bool,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

/// Parser for a single line of session input
#[derive(Parser)]
#[clap(multicall = true)]
pub struct SessionInput {
    /// Command to run against the note store
    #[clap(subcommand)]
    pub command: Commands,
}
