// Scoring pipeline: Tokenizer -> FrequencyVector -> cosine similarity.
//
// Each document in a pair is tokenized and counted independently, then the
// two vectors are compared. Nothing is kept between calls; repeated scoring
// against one reference goes through `batch::CachedReference` instead.

pub mod batch;

use std::sync::OnceLock;

use tracing::debug;

use crate::similarity::cosine::cosine_similarity;
use crate::similarity::tokenizer::Tokenizer;
use crate::similarity::vector::FrequencyVector;

pub struct Pipeline {
    tokenizer: Tokenizer,
}

impl Default for Pipeline {
    /// Jieba dictionary segmentation, NFKC normalization, no stop words.
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}

impl Pipeline {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize and count one document.
    pub fn vectorize(&self, text: &str) -> FrequencyVector {
        FrequencyVector::from_tokens(self.tokenizer.tokenize(text))
    }

    /// Similarity of `suspect` to `original`, in [0, 1].
    pub fn score(&self, original: &str, suspect: &str) -> f64 {
        let original_vec = self.vectorize(original);
        let suspect_vec = self.vectorize(suspect);
        let score = cosine_similarity(&original_vec, &suspect_vec);

        debug!(
            original_tokens = original_vec.total(),
            original_vocab = original_vec.len(),
            suspect_tokens = suspect_vec.total(),
            suspect_vocab = suspect_vec.len(),
            score,
            "Scored document pair"
        );

        score
    }
}

/// Score a document pair with the default pipeline.
///
/// The default jieba dictionary is built on first use and shared read-only
/// afterwards; it is never mutated.
pub fn score(original: &str, suspect: &str) -> f64 {
    static DEFAULT: OnceLock<Pipeline> = OnceLock::new();
    DEFAULT.get_or_init(Pipeline::default).score(original, suspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::segment::MaxMatchSegmenter;
    use crate::similarity::tokenizer::TokenizerConfig;

    fn fruit_pipeline() -> Pipeline {
        let seg = MaxMatchSegmenter::new(["苹果", "香蕉", "橙子"]);
        Pipeline::new(Tokenizer::new(Box::new(seg), TokenizerConfig::default()))
    }

    #[test]
    fn test_one_shared_word_of_two() {
        assert_eq!(fruit_pipeline().score("苹果香蕉", "苹果橙子"), 0.5);
    }

    #[test]
    fn test_punctuation_does_not_matter() {
        let p = fruit_pipeline();
        assert_eq!(p.score("苹果，香蕉！", "苹果香蕉"), 1.0);
    }

    #[test]
    fn test_vectorize_counts() {
        let v = fruit_pipeline().vectorize("苹果苹果香蕉");
        assert_eq!(v.get("苹果"), 2);
        assert_eq!(v.get("香蕉"), 1);
        assert_eq!(v.total(), 3);
    }

    #[test]
    fn test_empty_documents() {
        let p = fruit_pipeline();
        assert_eq!(p.score("", ""), 1.0);
        assert_eq!(p.score("苹果", ""), 0.0);
        assert_eq!(p.score("", "苹果"), 0.0);
    }
}
