//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    HtmlFormatter, JsonFormatter, LineStyle, MarkdownFormatter, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use silabas_api::{ApiError, Config, Output, SyllableProcessor};
use silabas_core::{Options, PrefixStrategy, Region};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to split
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Word list files or patterns (supports glob), one word per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Keep hiatus vowels in the same syllable
    #[arg(long)]
    pub no_hiatus: bool,

    /// Regional variant (es_ES, es_MX, es_AR, es_CO, es_US)
    #[arg(short, long, value_name = "REGION")]
    pub region: Option<String>,

    /// Prefix strategy (phonetic, morphological, adaptive)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Separator placed between syllables
    #[arg(long, value_name = "STR")]
    pub separator: Option<String>,

    /// Show the exception tags that fired
    #[arg(long)]
    pub show_exceptions: bool,

    /// Show division points
    #[arg(long)]
    pub show_points: bool,

    /// Process words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Stop at the first invalid word
    #[arg(long)]
    pub fail_fast: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SILABAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `word: syl-la-bles` line per word
    Text,
    /// JSON array of words with division points and exceptions
    Json,
    /// Markdown numbered list
    Markdown,
    /// HTML paragraphs of syllable spans
    Html,
}

/// Command-line flags merged over the configuration file
#[derive(Debug, Clone)]
pub struct Settings {
    pub options: Options,
    pub format: OutputFormat,
    pub style: LineStyle,
    pub cache_capacity: usize,
    pub parallel: bool,
    pub threads: Option<usize>,
}

type WordResult = std::result::Result<Output, ApiError>;

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting syllabification");
        log::debug!("Arguments: {:?}", self);

        let settings = self.resolve_settings()?;
        let words = self.collect_words()?;
        if words.is_empty() {
            return Err(CliError::NoInput.into());
        }
        log::info!("Processing {} words", words.len());

        let processor = SyllableProcessor::with_config(Config {
            options: settings.options,
            cache_capacity: settings.cache_capacity,
        });

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_words(words.len() as u64);
        let results = self.process_words(&processor, &words, &settings, &progress);
        progress.finish();
        let results = results?;

        let mut formatter = self.create_formatter(&settings)?;
        let mut rejected = 0;
        for result in results {
            match result {
                Ok(output) => formatter.format_word(&output)?,
                Err(err) => {
                    rejected += 1;
                    log::warn!("Skipping word: {err}");
                    eprintln!("error: {err}");
                }
            }
        }
        formatter.finish()?;

        if rejected > 0 {
            log::info!("{rejected} of {} words rejected", words.len());
        }
        log::info!("Memoized results: {}", processor.cache_len());
        Ok(())
    }

    /// Merge the configuration file (if any) with command-line flags
    pub fn resolve_settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let mut options = file_config.options()?;
        if self.no_hiatus {
            options.include_hiatus = false;
        }
        if let Some(region) = &self.region {
            options.region = region
                .parse::<Region>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
        }
        if let Some(strategy) = &self.strategy {
            options.prefix_strategy = strategy
                .parse::<PrefixStrategy>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
        }

        let format = match self.format {
            Some(format) => format,
            None => <OutputFormat as ValueEnum>::from_str(&file_config.output.format, true)
                .map_err(|_| {
                    CliError::ConfigError(format!(
                        "unknown output format '{}'",
                        file_config.output.format
                    ))
                })?,
        };

        let style = LineStyle {
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| file_config.output.separator.clone()),
            show_points: self.show_points || file_config.output.show_points,
            show_exceptions: self.show_exceptions || file_config.output.show_exceptions,
        };

        let performance = &file_config.performance;
        let threads = self
            .threads
            .or((performance.threads > 0).then_some(performance.threads));
        if threads == Some(0) {
            return Err(CliError::ConfigError("thread count must be positive".to_string()).into());
        }

        Ok(Settings {
            options,
            format,
            style,
            cache_capacity: performance.cache_capacity,
            parallel: self.parallel || performance.parallel || threads.is_some(),
            threads,
        })
    }

    /// Positional words, then words from files; stdin when neither is given
    pub fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading words from {}", path.display());
                words.extend(FileReader::read_words(&path)?);
            }
        } else if words.is_empty() {
            log::debug!("Reading words from stdin");
            words = FileReader::read_words_from(io::stdin().lock())?;
        }

        Ok(words)
    }

    fn process_words(
        &self,
        processor: &SyllableProcessor,
        words: &[String],
        settings: &Settings,
        progress: &ProgressReporter,
    ) -> Result<Vec<WordResult>> {
        let run = |word: &String| {
            let result = processor.process(word);
            progress.word_completed();
            result
        };

        let batch = || -> std::result::Result<Vec<WordResult>, ApiError> {
            if self.fail_fast {
                let outputs: Vec<Output> = if settings.parallel {
                    words
                        .par_iter()
                        .map(run)
                        .collect::<std::result::Result<Vec<Output>, ApiError>>()?
                } else {
                    words
                        .iter()
                        .map(run)
                        .collect::<std::result::Result<Vec<Output>, ApiError>>()?
                };
                Ok(outputs.into_iter().map(Ok).collect())
            } else if settings.parallel {
                Ok(words.par_iter().map(run).collect())
            } else {
                Ok(words.iter().map(run).collect())
            }
        };

        let results = match (settings.parallel, settings.threads) {
            (true, Some(threads)) => {
                log::info!("Using {threads} worker threads");
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?;
                pool.install(batch)
            }
            (true, None) => {
                log::info!("Using {} worker threads", num_cpus::get());
                batch()
            }
            (false, _) => batch(),
        };

        results.map_err(|e| CliError::ProcessingError(e.to_string()).into())
    }

    fn create_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn create_formatter(&self, settings: &Settings) -> Result<Box<dyn OutputFormatter>> {
        let writer = self.create_writer()?;
        let style = settings.style.clone();
        Ok(match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, style)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, style)),
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a second initialization (tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
