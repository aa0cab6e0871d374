//! HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use silabas_api::{html::escape, render_html, Output};
use std::io::Write;

/// HTML formatter - one `<p>` of syllable spans per word
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_word(&mut self, output: &Output) -> Result<()> {
        writeln!(
            self.writer,
            "<p data-word=\"{}\">{}</p>",
            escape(&output.word),
            render_html(&output.syllables)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
