//! Counting contiguous token windows.
//!
//! Each sentence is padded with `n` start markers and one end marker before
//! its windows of length `n` are counted, so windows reaching into the padding
//! are counted too.

use std::borrow::Borrow;
use std::fmt;

use ahash::AHashMap;

use crate::analysis::token::{END_TOKEN, START_TOKEN};
use crate::error::{Result, WordsmithError};

/// A fixed-length window of tokens, hashed and compared over all its tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NGram(Box<[String]>);

impl NGram {
    /// Create an n-gram from tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NGram(tokens.into_iter().map(Into::into).collect())
    }

    /// The tokens of this n-gram.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Number of tokens.
    pub fn order(&self) -> usize {
        self.0.len()
    }
}

impl Borrow<[String]> for NGram {
    fn borrow(&self) -> &[String] {
        &self.0
    }
}

impl From<&[String]> for NGram {
    fn from(tokens: &[String]) -> Self {
        NGram(tokens.into())
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

/// Pad a sentence for order `n`: `n` start markers, the tokens, one end marker.
pub fn pad_sentence(sentence: &[String], n: usize) -> Vec<String> {
    let mut padded = Vec::with_capacity(n + sentence.len() + 1);
    padded.extend(std::iter::repeat_n(START_TOKEN.to_string(), n));
    padded.extend(sentence.iter().cloned());
    padded.push(END_TOKEN.to_string());
    padded
}

/// Occurrence counts of every n-gram of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramCounts {
    order: usize,
    counts: AHashMap<NGram, u64>,
    total: u64,
}

impl NGramCounts {
    /// Count the order-`n` windows of every padded sentence.
    ///
    /// Counts are additive, so the order of `sentences` does not matter.
    pub fn count(sentences: &[Vec<String>], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(WordsmithError::invalid_config(
                "n-gram order must be at least 1",
            ));
        }

        let mut counts: AHashMap<NGram, u64> = AHashMap::new();
        let mut total = 0;

        for sentence in sentences {
            let padded = pad_sentence(sentence, n);
            for window in padded.windows(n) {
                match counts.get_mut(window) {
                    Some(count) => *count += 1,
                    None => {
                        counts.insert(NGram::from(window), 1);
                    }
                }
                total += 1;
            }
        }

        Ok(NGramCounts {
            order: n,
            counts,
            total,
        })
    }

    /// Window length `n`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Count of `window`, 0 when unseen or of a different length.
    pub fn get(&self, window: &[String]) -> u64 {
        self.counts.get(window).copied().unwrap_or(0)
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of windows counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(n-gram, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&NGram, u64)> {
        self.counts.iter().map(|(gram, &count)| (gram, count))
    }
}
