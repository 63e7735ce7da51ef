//! Additive (k) smoothing over a pair of adjacent n-gram tables.
//!
//! ```text
//! P(word | window) = (count(window + word) + k) / (count(window) + k * V)
//! ```
//!
//! where the window has `n` tokens, `window + word` is looked up in the
//! order-`n + 1` table, and `V` counts the vocabulary plus the end and
//! unknown markers. Unseen windows and words fall back to `k / (k * V)`.

use rayon::prelude::*;

use crate::analysis::vocabulary::Vocabulary;
use crate::config::validate_smoothing;
use crate::error::{Result, WordsmithError};
use crate::language_model::ngram::NGramCounts;

/// Two count tables whose orders differ by exactly one.
#[derive(Debug, Clone, Copy)]
pub struct NGramPair<'a> {
    lower: &'a NGramCounts,
    higher: &'a NGramCounts,
}

impl<'a> NGramPair<'a> {
    /// Pair an order-`n` table with an order-`n + 1` table.
    pub fn new(lower: &'a NGramCounts, higher: &'a NGramCounts) -> Result<Self> {
        if higher.order() != lower.order() + 1 {
            return Err(WordsmithError::invalid_argument(format!(
                "n-gram tables must have consecutive orders, got {} and {}",
                lower.order(),
                higher.order()
            )));
        }
        Ok(NGramPair { lower, higher })
    }

    /// Pair every table with its successor. Tables must be sorted by order
    /// and consecutive.
    pub fn consecutive(tables: &'a [NGramCounts]) -> Result<Vec<Self>> {
        tables
            .windows(2)
            .map(|pair| NGramPair::new(&pair[0], &pair[1]))
            .collect()
    }

    /// Length of the conditioning window.
    pub fn order(&self) -> usize {
        self.lower.order()
    }

    /// The order-`n` table.
    pub fn lower(&self) -> &'a NGramCounts {
        self.lower
    }

    /// The order-`n + 1` table.
    pub fn higher(&self) -> &'a NGramCounts {
        self.higher
    }
}

/// Computes k-smoothed conditional word probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedEstimator {
    k: f64,
    vocabulary_size: usize,
}

impl SmoothedEstimator {
    /// Create an estimator for an outcome space of `vocabulary_size` words.
    ///
    /// `vocabulary_size` must already include the end and unknown markers.
    pub fn new(k: f64, vocabulary_size: usize) -> Result<Self> {
        validate_smoothing(k)?;
        if vocabulary_size == 0 {
            return Err(WordsmithError::invalid_argument(
                "vocabulary size must be positive",
            ));
        }
        Ok(SmoothedEstimator { k, vocabulary_size })
    }

    /// Create an estimator whose outcome space is `vocabulary` plus markers.
    pub fn for_vocabulary(k: f64, vocabulary: &Vocabulary) -> Result<Self> {
        SmoothedEstimator::new(k, vocabulary.size_with_markers())
    }

    /// The smoothing constant.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Size of the outcome space.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// `P(word | window)` using the tables of `pair`.
    pub fn estimate(&self, word: &str, window: &[String], pair: NGramPair<'_>) -> Result<f64> {
        let mut key = self.window_key(window, pair)?;
        key.push(word.to_string());
        Ok(self.smooth(pair.lower.get(window), pair.higher.get(&key)))
    }

    /// `P(word | window)` for every word of the vocabulary's candidate pool,
    /// in pool order.
    pub fn estimate_all(
        &self,
        window: &[String],
        pair: NGramPair<'_>,
        vocabulary: &Vocabulary,
    ) -> Result<Vec<(String, f64)>> {
        let key = self.window_key(window, pair)?;
        let window_count = pair.lower.get(window);

        Ok(vocabulary
            .candidate_pool()
            .into_par_iter()
            .map(|word| {
                let mut key = key.clone();
                key.push(word.to_string());
                let probability = self.smooth(window_count, pair.higher.get(&key));
                (word.to_string(), probability)
            })
            .collect())
    }

    fn window_key(&self, window: &[String], pair: NGramPair<'_>) -> Result<Vec<String>> {
        if window.len() != pair.order() {
            return Err(WordsmithError::invalid_argument(format!(
                "window has {} tokens but the table order is {}",
                window.len(),
                pair.order()
            )));
        }
        let mut key = Vec::with_capacity(window.len() + 1);
        key.extend_from_slice(window);
        Ok(key)
    }

    fn smooth(&self, window_count: u64, continuation_count: u64) -> f64 {
        let numerator = continuation_count as f64 + self.k;
        let denominator = window_count as f64 + self.k * self.vocabulary_size as f64;
        numerator / denominator
    }
}
