//! Plain text output formatter

use super::{LineStyle, OutputFormatter};
use anyhow::Result;
use silabas_api::Output;
use std::io::Write;

/// Plain text formatter - outputs one `word: syl-la-bles` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
    style: LineStyle,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, style: LineStyle) -> Self {
        Self { writer, style }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, output: &Output) -> Result<()> {
        writeln!(self.writer, "{}: {}", output.word, self.style.render(output))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
