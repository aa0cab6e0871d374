//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to pick a region and prefix strategy");
        println!("2. Use it for splitting:");
        println!(
            "   silabas split -i palabras.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# silabas configuration

[syllabification]
# Split hiatus sequences (rí-o). false keeps them together (río)
include_hiatus = true

# Regional variant: es_ES, es_MX, es_AR, es_CO, es_US
# es_MX keeps "tl" in one onset (a-tle-ta)
region = "es_ES"

# Prefix strategy: phonetic, morphological, adaptive
# (Spanish names fonetica, morfologica, adaptativa are accepted too)
prefix_strategy = "phonetic"

[output]
# text, json, markdown or html
format = "text"

# Placed between syllables in text and markdown output
separator = "-"

show_exceptions = false
show_points = false

[performance]
# Memoized results kept in memory (0 disables the memo)
cache_capacity = {}

parallel = false

# Worker threads (0 = one per CPU)
threads = 0
"#,
            silabas_api::DEFAULT_CACHE_CAPACITY
        )
    }
}
