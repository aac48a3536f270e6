// Similarity bands — coarse labels for a score, used in terminal and JSON
// output. The score itself is what gets written to the result file.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityBand {
    Low,
    Moderate,
    High,
}

impl SimilarityBand {
    /// Determine the band from a similarity score (0.0-1.0).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.80 => SimilarityBand::High,
            s if s >= 0.50 => SimilarityBand::Moderate,
            _ => SimilarityBand::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::Low => "Low",
            SimilarityBand::Moderate => "Moderate",
            SimilarityBand::High => "High",
        }
    }

    /// One-line reading of the band for the terminal summary.
    pub fn describe(&self) -> &'static str {
        match self {
            SimilarityBand::High => "likely derived from the original",
            SimilarityBand::Moderate => "substantial shared wording",
            SimilarityBand::Low => "little shared wording",
        }
    }
}

impl std::fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
