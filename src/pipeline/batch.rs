// Batch scoring: many suspects against one original.
//
// The original is tokenized and counted once by `CachedReference`; every
// suspect is then an independent pipeline run, so rayon can spread them over
// worker threads without any locking. Results come back in input order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::Pipeline;
use crate::similarity::band::SimilarityBand;
use crate::similarity::cosine::cosine_similarity;
use crate::similarity::vector::FrequencyVector;

/// A reference document vectorized once, scored against many suspects.
pub struct CachedReference<'p> {
    pipeline: &'p Pipeline,
    reference: FrequencyVector,
}

impl<'p> CachedReference<'p> {
    pub fn new(pipeline: &'p Pipeline, reference_text: &str) -> Self {
        let reference = pipeline.vectorize(reference_text);
        info!(
            tokens = reference.total(),
            vocab = reference.len(),
            "Vectorized reference document"
        );
        Self {
            pipeline,
            reference,
        }
    }

    pub fn vector(&self) -> &FrequencyVector {
        &self.reference
    }

    /// Same result as `Pipeline::score(reference, suspect)`.
    pub fn score(&self, suspect: &str) -> f64 {
        cosine_similarity(&self.reference, &self.pipeline.vectorize(suspect))
    }

    /// Score every suspect in parallel, in input order.
    pub fn score_many<S>(&self, suspects: &[S]) -> Vec<f64>
    where
        S: AsRef<str> + Sync,
    {
        self.score_many_with(suspects, || {})
    }

    /// Like `score_many`, calling `on_scored` once per finished suspect
    /// (from whichever worker thread finished it).
    pub fn score_many_with<S, F>(&self, suspects: &[S], on_scored: F) -> Vec<f64>
    where
        S: AsRef<str> + Sync,
        F: Fn() + Sync,
    {
        suspects
            .par_iter()
            .map(|suspect| {
                let score = self.score(suspect.as_ref());
                on_scored();
                score
            })
            .collect()
    }
}

/// Score every suspect against `reference` with `pipeline`.
pub fn score_batch<S>(pipeline: &Pipeline, reference: &str, suspects: &[S]) -> Vec<f64>
where
    S: AsRef<str> + Sync,
{
    CachedReference::new(pipeline, reference).score_many(suspects)
}

/// One suspect's outcome in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub suspect: String,
    pub score: f64,
    pub band: SimilarityBand,
}

impl BatchResult {
    pub fn new(suspect: impl Into<String>, score: f64) -> Self {
        Self {
            suspect: suspect.into(),
            score,
            band: SimilarityBand::from_score(score),
        }
    }
}

/// Pair labels with scores and sort highest score first. Ties keep input
/// order.
pub fn rank<L: Into<String>>(labels: Vec<L>, scores: &[f64]) -> Vec<BatchResult> {
    let mut results: Vec<BatchResult> = labels
        .into_iter()
        .zip(scores)
        .map(|(label, &score)| BatchResult::new(label, score))
        .collect();
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
