// FrequencyVector — term counts for one document.
//
// A sparse vector over token space: tokens that never occur are implicitly
// zero. Plain term frequency, no smoothing or IDF weighting.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyVector {
    counts: HashMap<String, u32>,
}

impl FrequencyVector {
    /// Count every token in the sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            let token = token.as_ref();
            // Avoid allocating a key for tokens already counted.
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                }
            }
        }
        Self { counts }
    }

    /// Count for `token`, zero when absent.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts — the length of the token sequence it came from.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Σ v² over all tokens.
    pub fn squared_norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .fold(0.0, |acc, x| acc + x)
    }

    /// Σ self[w]·other[w]. Only tokens present in both contribute, so the
    /// smaller map is walked. Folds from `+0.0` so disjoint vectors give
    /// positive zero (`f64::sum` starts from `-0.0`).
    pub fn dot(&self, other: &FrequencyVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(token, &a)| {
                large
                    .counts
                    .get(token)
                    .map(|&b| f64::from(a) * f64::from(b))
            })
            .fold(0.0, |acc, x| acc + x)
    }

    /// Tokens sorted by count descending, then token ascending.
    pub fn sorted(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}
