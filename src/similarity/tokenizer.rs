// Tokenizer — raw text to a sequence of word units.
//
// Text is NFKC-normalized, then split into runs of Chinese characters and
// runs of other letters/digits. Everything else (whitespace, punctuation,
// symbols) only separates runs and never reaches a token. Chinese runs go
// through the configured Segmenter; other runs are kept whole, so Latin
// words and numbers keep their exact form.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use super::segment::JiebaSegmenter;
use super::stopwords::StopWords;
use super::traits::Segmenter;

/// Options applied around segmentation.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Tokens in this set are dropped entirely
    pub stopwords: StopWords,
    /// Apply NFKC so full-width letters and digits match their ASCII forms
    pub normalize: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stopwords: StopWords::none(),
            normalize: true,
        }
    }
}

pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
    config: TokenizerConfig,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Box::new(JiebaSegmenter::new()), TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>, config: TokenizerConfig) -> Self {
        Self { segmenter, config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split text into word units, dropping punctuation, whitespace and
    /// stop words. Empty or punctuation-only text gives an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text: Cow<'_, str> = if self.config.normalize {
            Cow::Owned(text.nfkc().collect())
        } else {
            Cow::Borrowed(text)
        };

        let mut tokens = Vec::new();
        for (class, run) in split_runs(&text) {
            match class {
                CharClass::Han => tokens.extend(
                    self.segmenter
                        .segment(run)
                        .into_iter()
                        .filter(|word| self.keep(word))
                        .map(str::to_string),
                ),
                CharClass::Word => {
                    if self.keep(run) {
                        tokens.push(run.to_string());
                    }
                }
                CharClass::Separator => {}
            }
        }
        tokens
    }

    fn keep(&self, word: &str) -> bool {
        !word.trim().is_empty() && !self.config.stopwords.contains(word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Han,
    Word,
    Separator,
}

fn classify(c: char) -> CharClass {
    if is_han(c) {
        CharClass::Han
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Separator
    }
}

/// Whether `c` is a Chinese (Han) ideograph.
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{20000}'..='\u{2A6DF}' // Extension B
        | '\u{2A700}'..='\u{2EBEF}' // Extensions C-F
        | '\u{30000}'..='\u{323AF}' // Extensions G-H
        | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
        | '\u{3007}'                // 〇
    )
}

/// Split text into maximal runs of characters sharing a class.
fn split_runs(text: &str) -> Vec<(CharClass, &str)> {
    let mut runs = Vec::new();
    let mut current: Option<(CharClass, usize)> = None;

    for (i, c) in text.char_indices() {
        let class = classify(c);
        match current {
            Some((prev, _)) if prev == class => {}
            Some((prev, start)) => {
                runs.push((prev, &text[start..i]));
                current = Some((class, i));
            }
            None => current = Some((class, i)),
        }
    }
    if let Some((class, start)) = current {
        runs.push((class, &text[start..]));
    }

    runs
}
