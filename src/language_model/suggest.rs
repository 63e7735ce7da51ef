//! Next-word suggestion from smoothed n-gram probabilities.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{START_TOKEN, is_marker};
use crate::analysis::vocabulary::Vocabulary;
use crate::error::Result;
use crate::language_model::estimator::{NGramPair, SmoothedEstimator};
use crate::language_model::ngram::NGramCounts;

/// The best next word proposed by one n-gram order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The proposed word, `None` when no candidate qualified.
    pub word: Option<String>,
    /// Its smoothed probability, 0 when `word` is `None`.
    pub probability: f64,
    /// Window length of the n-gram order that produced it.
    pub order: usize,
}

impl Suggestion {
    /// A suggestion that found nothing.
    pub fn none(order: usize) -> Self {
        Suggestion {
            word: None,
            probability: 0.0,
            order,
        }
    }

    /// Whether a word was found.
    pub fn is_found(&self) -> bool {
        self.word.is_some()
    }
}

/// The last `n` tokens of `tokens`, as seen by a model trained with
/// `vocabulary`.
///
/// Words outside the vocabulary become the unknown marker, and sequences
/// shorter than `n` are left-padded with start markers the same way training
/// sentences are.
pub fn context_window(tokens: &[String], n: usize, vocabulary: &Vocabulary) -> Vec<String> {
    let tail = &tokens[tokens.len().saturating_sub(n)..];
    let mut window = Vec::with_capacity(n);
    window.extend(std::iter::repeat_n(START_TOKEN.to_string(), n - tail.len()));
    window.extend(tail.iter().map(|token| {
        if is_marker(token) {
            token.clone()
        } else {
            vocabulary.normalize(token).to_string()
        }
    }));
    window
}

/// Suggest the most probable next word for one n-gram order.
///
/// Candidates are scanned in the vocabulary's pool order and only a strictly
/// greater probability replaces the running best, so the first of several
/// equally probable words wins. With `prefix`, only words starting with it
/// are considered.
pub fn suggest_word(
    tokens: &[String],
    pair: NGramPair<'_>,
    vocabulary: &Vocabulary,
    estimator: &SmoothedEstimator,
    prefix: Option<&str>,
) -> Result<Suggestion> {
    let order = pair.order();
    let window = context_window(tokens, order, vocabulary);
    let distribution = estimator.estimate_all(&window, pair, vocabulary)?;

    let mut best = Suggestion::none(order);
    for (word, probability) in distribution {
        if let Some(prefix) = prefix
            && !word.starts_with(prefix)
        {
            continue;
        }
        if probability > best.probability {
            best.word = Some(word);
            best.probability = probability;
        }
    }

    Ok(best)
}

/// One suggestion per consecutive pair of `tables`, lowest order first.
pub fn suggestions(
    tokens: &[String],
    tables: &[NGramCounts],
    vocabulary: &Vocabulary,
    estimator: &SmoothedEstimator,
    prefix: Option<&str>,
) -> Result<Vec<Suggestion>> {
    NGramPair::consecutive(tables)?
        .into_iter()
        .map(|pair| suggest_word(tokens, pair, vocabulary, estimator, prefix))
        .collect()
}

/// Merge per-order suggestions into a single best word.
///
/// Each distinct word keeps the highest probability any order gave it; the
/// word with the highest merged probability wins, earlier suggestions first
/// on ties.
pub fn best_suggestion(suggestions: &[Suggestion]) -> Option<(String, f64)> {
    let mut merged: Vec<(&str, f64)> = Vec::new();
    for suggestion in suggestions {
        let Some(word) = suggestion.word.as_deref() else {
            continue;
        };
        match merged.iter_mut().find(|(w, _)| *w == word) {
            Some(entry) => entry.1 = entry.1.max(suggestion.probability),
            None => merged.push((word, suggestion.probability)),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (word, probability) in merged {
        if best.is_none_or(|(_, p)| probability > p) {
            best = Some((word, probability));
        }
    }
    best.map(|(word, probability)| (word.to_string(), probability))
}
