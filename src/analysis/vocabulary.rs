//! Closed vocabulary and out-of-vocabulary substitution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::token::{END_TOKEN, UNKNOWN_TOKEN, is_marker};
use crate::spelling::dictionary::FrequencyTable;

/// The fixed set of words retained from training.
///
/// Words are kept in lexicographic order so every scan over the vocabulary,
/// and therefore every tie-break, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    /// Build from an explicit word list. Duplicates collapse and reserved
    /// markers are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|word: &String| !is_marker(word))
                .collect(),
        }
    }

    /// Keep every word whose count is at least `min_frequency`. Reserved
    /// markers never enter the vocabulary, even when the input was already
    /// OOV-substituted.
    pub fn from_frequencies(frequencies: &FrequencyTable, min_frequency: u64) -> Self {
        Vocabulary {
            words: frequencies
                .iter()
                .filter(|&(word, count)| count >= min_frequency && !is_marker(word))
                .map(|(word, _)| word.to_string())
                .collect(),
        }
    }

    /// Whether `word` belongs to the closed vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of retained words, markers excluded.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was retained.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Retained words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Retained words as an owned list, e.g. for persistence.
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Outcomes a next-word distribution ranges over: every retained word in
    /// lexicographic order, then the end and unknown markers.
    pub fn candidate_pool(&self) -> Vec<&str> {
        self.iter().chain([END_TOKEN, UNKNOWN_TOKEN]).collect()
    }

    /// Vocabulary size used by additive smoothing: retained words plus the
    /// end and unknown markers.
    pub fn size_with_markers(&self) -> usize {
        self.words.len() + 2
    }

    /// Map a single token to itself or to the unknown marker.
    pub fn normalize<'a>(&self, token: &'a str) -> &'a str {
        if self.contains(token) {
            token
        } else {
            UNKNOWN_TOKEN
        }
    }

    /// Replace every out-of-vocabulary token with the unknown marker.
    pub fn replace_oov(&self, sentences: &[Vec<String>]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|sentence| {
                sentence
                    .iter()
                    .map(|token| self.normalize(token).to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_threshold() {
        let data = sentences(&[
            &["sky", "is", "blue", "."],
            &["leaves", "are", "green"],
            &["roses", "are", "red", "."],
        ]);
        let freqs = FrequencyTable::from_sentences(&data);
        let vocab = Vocabulary::from_frequencies(&freqs, 2);

        assert_eq!(vocab.to_vec(), vec![".", "are"]);
        assert_eq!(vocab.size_with_markers(), 4);
    }

    #[test]
    fn test_replace_oov() {
        let vocab = Vocabulary::from_words(["dogs", "sleep"]);
        let data = sentences(&[&["dogs", "sleep"], &["dogs", "run"]]);

        let replaced = vocab.replace_oov(&data);
        assert_eq!(replaced, sentences(&[&["dogs", "sleep"], &["dogs", "<unk>"]]));
    }

    #[test]
    fn test_candidate_pool_order() {
        let vocab = Vocabulary::from_words(["zebra", "apple", "mango"]);
        assert_eq!(
            vocab.candidate_pool(),
            vec!["apple", "mango", "zebra", "<e>", "<unk>"]
        );
    }

    #[test]
    fn test_markers_never_enter_vocabulary() {
        let data = sentences(&[&["x", "<unk>", "<unk>"], &["<s>", "x", "<e>"]]);
        let freqs = FrequencyTable::from_sentences(&data);
        let vocab = Vocabulary::from_frequencies(&freqs, 1);

        assert_eq!(vocab.to_vec(), vec!["x"]);
        assert_eq!(vocab.candidate_pool(), vec!["x", "<e>", "<unk>"]);
        assert_eq!(vocab.size_with_markers(), 3);

        let listed = Vocabulary::from_words(["<unk>", "y", "<e>"]);
        assert_eq!(listed.to_vec(), vec!["y"]);
    }
}
