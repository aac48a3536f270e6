// Segmenter implementations.
//
// `JiebaSegmenter` is the default: it walks the word DAG built from the
// bundled jieba dictionary and picks the maximum-probability route, so known
// multi-character words win over single characters. `MaxMatchSegmenter` is
// plain forward maximum matching over a caller-supplied word list.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use jieba_rs::Jieba;
use tracing::info;

use super::traits::Segmenter;

/// Dictionary segmenter backed by `jieba-rs`.
pub struct JiebaSegmenter {
    jieba: Jieba,
    /// Use the HMM to join characters that are not in the dictionary.
    /// Off by default so output depends on the dictionary alone.
    hmm: bool,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Build a segmenter over the bundled dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: false,
        }
    }

    /// Enable or disable HMM recovery of out-of-dictionary words.
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    /// Merge a user dictionary into the bundled one.
    ///
    /// The file uses the jieba format: one entry per line, `word [freq] [tag]`.
    pub fn load_user_dict(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open user dictionary {}", path.display()))?;
        let mut reader = BufReader::new(file);
        self.jieba.load_dict(&mut reader).map_err(|e| {
            anyhow::anyhow!("Failed to load user dictionary {}: {e}", path.display())
        })?;
        info!(path = %path.display(), "Loaded user dictionary");
        Ok(())
    }

    /// Add a single word with a frequency suggested by jieba.
    pub fn add_word(&mut self, word: &str) {
        self.jieba.add_word(word, None, None);
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.jieba.cut(text, self.hmm)
    }
}

/// Forward maximum matching over a fixed word list.
///
/// At each position the longest dictionary word starting there is taken;
/// characters that start no dictionary word become single-character tokens.
pub struct MaxMatchSegmenter {
    words: HashSet<String>,
    /// Length in characters of the longest dictionary word
    max_word_chars: usize,
}

impl MaxMatchSegmenter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        let max_word_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(1);

        Self {
            words,
            max_word_chars,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Segmenter for MaxMatchSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // Byte offset of every character boundary, including the end.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut words = Vec::new();
        let mut start = 0;

        while start < char_count {
            let longest = self.max_word_chars.min(char_count - start);
            let end = (2..=longest)
                .rev()
                .map(|n| start + n)
                .find(|&end| self.words.contains(&text[bounds[start]..bounds[end]]))
                .unwrap_or(start + 1);

            words.push(&text[bounds[start]..bounds[end]]);
            start = end;
        }

        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_match_prefers_longest_word() {
        let seg = MaxMatchSegmenter::new(["北京", "天安门", "天安", "我", "爱"]);
        assert_eq!(seg.segment("我爱北京天安门"), vec!["我", "爱", "北京", "天安门"]);
    }

    #[test]
    fn test_max_match_unknown_chars_are_single_tokens() {
        let seg = MaxMatchSegmenter::new(["苹果"]);
        assert_eq!(seg.segment("苹果香蕉"), vec!["苹果", "香", "蕉"]);
    }

    #[test]
    fn test_max_match_empty_input() {
        let seg = MaxMatchSegmenter::new(["苹果"]);
        assert!(seg.segment("").is_empty());
    }

    #[test]
    fn test_max_match_empty_dictionary() {
        let seg = MaxMatchSegmenter::new(Vec::<String>::new());
        assert!(seg.is_empty());
        assert_eq!(seg.segment("你好"), vec!["你", "好"]);
    }

    #[test]
    fn test_jieba_splits_known_words() {
        let seg = JiebaSegmenter::new();
        assert_eq!(seg.segment("我爱北京天安门"), vec!["我", "爱", "北京", "天安门"]);
    }

    #[test]
    fn test_jieba_output_covers_input() {
        let seg = JiebaSegmenter::new();
        let text = "机器学习是人工智能的核心分支";
        assert_eq!(seg.segment(text).concat(), text);
    }

    #[test]
    fn test_jieba_added_word_is_kept_whole() {
        let mut seg = JiebaSegmenter::new();
        seg.add_word("西区食堂");
        assert_eq!(seg.segment("西区食堂"), vec!["西区食堂"]);
    }
}
