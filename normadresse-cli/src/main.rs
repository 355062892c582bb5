//! normadresse command-line entry point

use anyhow::Result;
use clap::Parser;
use normadresse_cli::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "normadresse")]
#[command(about = "Shorten French postal address lines to a fixed width", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
