//! Word list reading

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Reads word lists: one word per line, blank lines and `#` comments skipped
pub struct FileReader;

impl FileReader {
    /// Read every word listed in a UTF-8 file
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::parse_words(&content))
    }

    /// Read words from any buffered reader (stdin)
    pub fn read_words_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.context("Failed to read input line")?;
            words.extend(Self::parse_words(&line));
        }
        Ok(words)
    }

    fn parse_words(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}
