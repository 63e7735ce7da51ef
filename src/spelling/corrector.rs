//! Frequency-ranked spelling correction.
//!
//! Candidates one edit away are tried first; only when none of them is a
//! vocabulary word does the corrector expand to two edits. Surviving
//! candidates are ranked by corpus probability.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::Vocabulary;
use crate::config::CorrectorConfig;
use crate::error::Result;
use crate::spelling::dictionary::ProbabilityTable;
use crate::spelling::edits::{EditCandidateSet, EditGenerator};

/// A proposed correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The vocabulary word proposed.
    pub word: String,
    /// Its empirical corpus probability.
    pub probability: f64,
    /// Number of atomic edits separating it from the input, 1 or 2.
    pub edits: u8,
}

impl Correction {
    /// Create a new correction.
    pub fn new(word: String, probability: f64, edits: u8) -> Self {
        Correction {
            word,
            probability,
            edits,
        }
    }

    /// Higher probability first, then alphabetical.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .probability
            .partial_cmp(&self.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Outcome of checking one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "corrections", rename_all = "snake_case")]
pub enum SpellCheck {
    /// The word is already in the vocabulary.
    Known,
    /// Ranked corrections, best first.
    Suggestions(Vec<Correction>),
    /// Nothing in the vocabulary is within two edits.
    NoCorrection,
}

impl SpellCheck {
    /// The corrections, empty unless `Suggestions`.
    pub fn corrections(&self) -> &[Correction] {
        match self {
            SpellCheck::Suggestions(corrections) => corrections,
            _ => &[],
        }
    }
}

/// Ranks corrections against a trained corpus.
///
/// The corrector only borrows the corpus tables, so any number of correctors
/// can share one trained model.
#[derive(Debug, Clone)]
pub struct SpellingCorrector<'a> {
    probabilities: &'a ProbabilityTable,
    vocabulary: &'a Vocabulary,
    generator: EditGenerator,
    config: CorrectorConfig,
}

impl<'a> SpellingCorrector<'a> {
    /// Create a corrector with the default configuration.
    pub fn new(probabilities: &'a ProbabilityTable, vocabulary: &'a Vocabulary) -> Self {
        let config = CorrectorConfig::default();
        SpellingCorrector {
            probabilities,
            vocabulary,
            generator: EditGenerator::new(&config.alphabet),
            config,
        }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(
        probabilities: &'a ProbabilityTable,
        vocabulary: &'a Vocabulary,
        config: CorrectorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(SpellingCorrector {
            probabilities,
            vocabulary,
            generator: EditGenerator::new(&config.alphabet),
            config,
        })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Whether `word` needs no correction.
    pub fn is_known(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Check a word, returning up to `max_suggestions` corrections when it is
    /// not in the vocabulary.
    pub fn check(&self, word: &str) -> SpellCheck {
        if self.is_known(word) {
            return SpellCheck::Known;
        }

        let corrections = self.corrections(word, self.config.max_suggestions);
        if corrections.is_empty() {
            SpellCheck::NoCorrection
        } else {
            SpellCheck::Suggestions(corrections)
        }
    }

    /// Up to `n` vocabulary words near `word`, most probable first.
    ///
    /// The caller is expected to have checked that `word` is not already
    /// known; a known word is treated like any other input.
    pub fn corrections(&self, word: &str, n: usize) -> Vec<Correction> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked = self.rank(self.generator.edit_one(word), 1);
        if ranked.is_empty() {
            debug!("no one-edit correction for {word:?}, expanding to two edits");
            ranked = self.rank(self.generator.edit_two(word), 2);
        }

        ranked.truncate(n);
        ranked
    }

    /// Keep the vocabulary members of `candidates`, each keyed by itself, and
    /// sort them by rank.
    fn rank(&self, candidates: EditCandidateSet, edits: u8) -> Vec<Correction> {
        let mut found: Vec<Correction> = candidates
            .into_iter()
            .filter(|candidate| self.vocabulary.contains(candidate))
            .map(|candidate| {
                let probability = self.probabilities.probability(&candidate);
                Correction::new(candidate, probability, edits)
            })
            .collect();

        found.sort_by(Correction::rank);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::FrequencyTable;

    fn corpus(words: &[(&str, u64)]) -> (ProbabilityTable, Vocabulary) {
        let mut freqs = FrequencyTable::new();
        for &(word, count) in words {
            freqs.add_count(word, count);
        }
        let vocab = Vocabulary::from_frequencies(&freqs, 1);
        (freqs.probabilities(), vocab)
    }

    #[test]
    fn test_correction_ordering() {
        let mut corrections = vec![
            Correction::new("world".to_string(), 0.2, 1),
            Correction::new("hello".to_string(), 0.5, 1),
            Correction::new("help".to_string(), 0.2, 1),
        ];
        corrections.sort_by(Correction::rank);

        let words: Vec<&str> = corrections.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["hello", "help", "world"]);
    }

    #[test]
    fn test_known_word() {
        let (probs, vocab) = corpus(&[("hello", 3)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);
        assert_eq!(corrector.check("hello"), SpellCheck::Known);
    }

    #[test]
    fn test_one_edit_ranked_by_probability() {
        let (probs, vocab) = corpus(&[("cat", 5), ("bat", 10), ("hat", 1), ("dog", 50)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);

        let corrections = corrector.corrections("xat", 2);
        let words: Vec<&str> = corrections.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["bat", "cat"]);
        assert!(corrections.iter().all(|c| c.edits == 1));
        assert!((corrections[0].probability - 10.0 / 66.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_edit_fallback_keeps_every_candidate() {
        let (probs, vocab) = corpus(&[("cart", 2), ("card", 3), ("dog", 50)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);

        // "cxrx" is two edits from both "cart" and "card", and one edit from neither.
        let corrections = corrector.corrections("cxrx", 5);
        let words: Vec<&str> = corrections.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["card", "cart"]);
        assert!(corrections.iter().all(|c| c.edits == 2));
    }

    #[test]
    fn test_one_edit_hit_skips_two_edit_search() {
        let (probs, vocab) = corpus(&[("coat", 1), ("cast", 100)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);

        // "cst" is one edit from "cast" and two from "coat".
        let corrections = corrector.corrections("cst", 5);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].word, "cast");
    }

    #[test]
    fn test_no_correction() {
        let (probs, vocab) = corpus(&[("elephant", 1)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);

        assert_eq!(corrector.check("zz"), SpellCheck::NoCorrection);
        assert!(corrector.corrections("zz", 3).is_empty());
    }

    #[test]
    fn test_zero_requested() {
        let (probs, vocab) = corpus(&[("cat", 1)]);
        let corrector = SpellingCorrector::new(&probs, &vocab);
        assert!(corrector.corrections("bat", 0).is_empty());
    }

    #[test]
    fn test_vocabulary_restricts_candidates() {
        let mut freqs = FrequencyTable::new();
        freqs.add_count("cat", 1);
        freqs.add_count("bat", 100);
        let probs = freqs.probabilities();
        let vocab = Vocabulary::from_words(["cat"]);

        let corrector = SpellingCorrector::new(&probs, &vocab);
        let corrections = corrector.corrections("hat", 3);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].word, "cat");
    }

    #[test]
    fn test_automatoin() {
        let (probs, vocab) = corpus(&[
            ("automation", 4),
            ("automaton", 1),
            ("the", 100),
            ("station", 7),
        ]);
        let corrector = SpellingCorrector::new(&probs, &vocab);

        let corrections = corrector.corrections("automatoin", 3);
        assert!(corrections.iter().any(|c| c.word == "automation"));
        assert_eq!(corrections[0].word, "automation");
    }
}
