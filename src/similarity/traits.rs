// Segmenter trait — swap-ready abstraction over Chinese word segmentation.
//
// Dictionary-based segmentation is heuristic: different dictionaries give
// different words for the same text. The tokenizer only depends on this
// trait, so the dictionary or algorithm can change without touching the
// vectorizer or the scorer.

/// Splits a run of Chinese characters into words.
///
/// Implementations receive text that contains only Han characters (the
/// tokenizer strips punctuation, whitespace and non-Chinese words first) and
/// must return slices of that input, in order, covering all of it.
pub trait Segmenter: Send + Sync {
    /// Segment a run of Chinese text into words.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}
