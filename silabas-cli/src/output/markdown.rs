//! Markdown output formatter

use super::{LineStyle, OutputFormatter};
use anyhow::Result;
use silabas_api::Output;
use std::io::Write;

/// Markdown formatter - outputs words as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    style: LineStyle,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, style: LineStyle) -> Self {
        Self {
            writer,
            style,
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, output: &Output) -> Result<()> {
        self.word_count += 1;
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.word_count,
            output.word,
            self.style.render(output)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
