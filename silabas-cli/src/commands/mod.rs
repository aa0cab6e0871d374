//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use silabas_core::{PrefixStrategy, Region};
use std::io::{self, Write};

pub mod generate_config;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words into syllables
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported regional variants
    Regions,

    /// List prefix strategies
    Strategies,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::List { subcommand } => subcommand.write_to(&mut io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the listing to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Regions => {
                writeln!(out, "Supported regions:")?;
                for region in Region::ALL {
                    let tl = if region.keeps_tl_together() {
                        "tl kept together (a-tle-ta)"
                    } else {
                        "tl split (at-le-ta)"
                    };
                    writeln!(out, "  {:<7} {}", region.code(), tl)?;
                }
            }
            ListCommands::Strategies => {
                writeln!(out, "Prefix strategies:")?;
                for strategy in PrefixStrategy::ALL {
                    let summary = match strategy {
                        PrefixStrategy::Phonetic => "divide by sound only (su-bra-yar)",
                        PrefixStrategy::Morphological => "keep known prefixes whole (sub-ra-yar)",
                        PrefixStrategy::Adaptive => "split prefixes only where the sound allows",
                    };
                    writeln!(
                        out,
                        "  {:<13} ({:<11}) {}",
                        strategy.name(),
                        strategy.spanish_name(),
                        summary
                    )?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in split::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        writeln!(out, "  {:<9} {}", value.get_name(), help)?;
                    }
                }
            }
        }
        Ok(())
    }
}
