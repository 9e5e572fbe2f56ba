//! voxsep - batch vocal separation and dereverberation driver.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use voxsep_core::{Config, batch, set_verbose};

/// Batch-process a directory of audio files with vocal extraction and
/// dereverberation models.
#[derive(Debug, Parser)]
#[command(name = "voxsep", version, about = "Batch vocal separation and dereverberation")]
struct Cli {
    /// Directory containing audio files to process
    #[arg(short, long)]
    directory: PathBuf,

    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Print verbose progress information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;
    batch::run(&cli.directory, &config)
}
