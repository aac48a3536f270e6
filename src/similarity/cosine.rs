// Cosine similarity between two term-frequency vectors.
//
//   similarity(A, B) = sum(A[w] * B[w]) / (|A| * |B|)
//
// over the union of tokens, missing tokens counting as zero. Counts are never
// negative, so the result lies in [0, 1]: 0.0 for no shared tokens, 1.0 for
// identical word distributions up to scaling.
//
// The formula is undefined for a zero vector, so empty documents are handled
// before it is evaluated:
//   both empty   -> 1.0 (nothing contradicts them being identical)
//   one empty    -> 0.0 (nothing can be shared)

use super::vector::FrequencyVector;

/// Score when both documents have no tokens.
pub const BOTH_EMPTY_SIMILARITY: f64 = 1.0;

/// Compute the cosine similarity of a reference vector and a candidate vector.
///
/// The denominator is taken as `sqrt(|A|^2 * |B|^2)` rather than
/// `|A| * |B|` so identical or proportional integer vectors land on exactly
/// 1.0 instead of one ulp below it.
pub fn cosine_similarity(reference: &FrequencyVector, candidate: &FrequencyVector) -> f64 {
    match (reference.is_empty(), candidate.is_empty()) {
        (true, true) => return BOTH_EMPTY_SIMILARITY,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let dot = reference.dot(candidate);
    let denom = (reference.squared_norm() * candidate.squared_norm()).sqrt();

    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(0.0, 1.0)
    }
}
