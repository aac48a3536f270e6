// Stop word sets.
//
// The tokenizer drops any token found here. The default set is empty; the
// built-in Chinese list comes from the `stop-words` crate, and files with one
// word per line can be merged in on top.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set — nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// The built-in Chinese stop word list.
    pub fn chinese() -> Self {
        let words: HashSet<String> = get(LANGUAGE::Chinese).into_iter().collect();
        debug!(count = words.len(), "Loaded built-in Chinese stop words");
        Self { words }
    }

    /// Read a stop word file: one word per line, blank lines and `#`
    /// comments ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop word file {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parse stop words from file contents.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Add every word from `other` to this set.
    pub fn merge(&mut self, other: StopWords) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
