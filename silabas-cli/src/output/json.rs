//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use silabas_api::Output;
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WordData {
    /// The word as analyzed
    pub word: String,
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Letter offsets where each syllable after the first begins
    pub division_points: Vec<usize>,
    /// Exception identifiers
    pub exceptions: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, output: &Output) -> Result<()> {
        self.words.push(WordData {
            word: output.word.clone(),
            syllables: output.syllables.clone(),
            division_points: output.division_points.clone(),
            exceptions: output.exceptions.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
