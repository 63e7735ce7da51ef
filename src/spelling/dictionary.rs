//! Corpus word counts and empirical word probabilities.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsmithError};

/// Occurrence counts of words in a training corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Words and their counts
    counts: AHashMap<String, u64>,
    /// Sum of all counts
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Count every word of a token multiset.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FrequencyTable::new();
        for word in words {
            table.add(word.as_ref());
        }
        table
    }

    /// Count every token of every tokenized sentence.
    pub fn from_sentences(sentences: &[Vec<String>]) -> Self {
        FrequencyTable::from_words(sentences.iter().flatten())
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    /// Record `count` occurrences of `word`.
    pub fn add_count(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(word) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(word.to_string(), count);
            }
        }
        self.total += count;
    }

    /// Count of `word`, 0 when unseen.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Whether `word` was observed at least once.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Total number of observed tokens.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Empirical probabilities over this table's own total.
    pub fn probabilities(&self) -> ProbabilityTable {
        ProbabilityTable {
            probabilities: self.relative_to(self.total),
        }
    }

    fn relative_to(&self, total: u64) -> AHashMap<String, f64> {
        self.counts
            .iter()
            .map(|(word, &count)| (word.clone(), count as f64 / total as f64))
            .collect()
    }
}

/// Empirical word probabilities `count / total` of a training corpus.
///
/// Unseen words have probability 0; no smoothing is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    probabilities: AHashMap<String, f64>,
}

impl ProbabilityTable {
    /// Divide every count of `frequencies` by `total_words`.
    ///
    /// `total_words` is passed separately so a table can be normalized against
    /// a larger corpus than the one it was counted from.
    pub fn from_frequencies(frequencies: &FrequencyTable, total_words: u64) -> Result<Self> {
        if total_words == 0 && !frequencies.is_empty() {
            return Err(WordsmithError::invalid_argument(
                "total word count must be positive for a non-empty frequency table",
            ));
        }
        Ok(ProbabilityTable {
            probabilities: frequencies.relative_to(total_words),
        })
    }

    /// Probability of `word`, 0 when unseen.
    pub fn probability(&self, word: &str) -> f64 {
        self.probabilities.get(word).copied().unwrap_or(0.0)
    }

    /// Whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.probabilities.contains_key(word)
    }

    /// Number of words with an entry.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Iterate `(word, probability)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(w, &p)| (w.as_str(), p))
    }
}
