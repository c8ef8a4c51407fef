use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidz")]
#[command(about = "In-memory video catalog and playback simulator", long_about = None)]
pub struct Cli {
    /// Path to a JSON catalog file (overrides the configured default)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Remember the given catalog path for future runs
    #[arg(long, requires = "catalog")]
    pub save_catalog: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
