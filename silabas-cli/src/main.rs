//! silabas command-line entry point

use anyhow::Result;
use clap::Parser;
use silabas_cli::commands::Commands;

/// Split Spanish words into syllables following the RAE rules
#[derive(Debug, Parser)]
#[command(name = "silabas", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
