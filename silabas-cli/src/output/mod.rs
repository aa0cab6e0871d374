//! Output formatting module

use anyhow::Result;
use silabas_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one syllabified word
    fn format_word(&mut self, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// What text-like formats show besides the syllables
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// Placed between syllables
    pub separator: String,
    /// Append division points
    pub show_points: bool,
    /// Append exception tags
    pub show_exceptions: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            show_points: false,
            show_exceptions: false,
        }
    }
}

impl LineStyle {
    /// `syl-la-bles [2, 4] {tag, tag}` according to the flags
    pub fn render(&self, output: &Output) -> String {
        let mut line = output.joined(&self.separator);
        if self.show_points {
            let points: Vec<String> = output.division_points.iter().map(usize::to_string).collect();
            line.push_str(&format!(" [{}]", points.join(", ")));
        }
        if self.show_exceptions && !output.exceptions.is_empty() {
            line.push_str(&format!(" {{{}}}", output.exceptions.join(", ")));
        }
        line
    }
}

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
pub(crate) fn sample_output(word: &str) -> Output {
    silabas_api::SyllableProcessor::new().process(word).unwrap()
}
