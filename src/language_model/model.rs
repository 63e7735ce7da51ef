//! The trained n-gram language model.

use log::info;
use rayon::prelude::*;

use crate::analysis::vocabulary::Vocabulary;
use crate::config::LanguageModelConfig;
use crate::error::{Result, WordsmithError};
use crate::language_model::completion::Completion;
use crate::language_model::estimator::{NGramPair, SmoothedEstimator};
use crate::language_model::ngram::NGramCounts;
use crate::language_model::suggest::{self, Suggestion};
use crate::spelling::dictionary::FrequencyTable;

/// Closed vocabulary plus one count table per order in
/// `min_order..=max_order`.
///
/// Built once by [`NGramModel::train`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct NGramModel {
    config: LanguageModelConfig,
    vocabulary: Vocabulary,
    tables: Vec<NGramCounts>,
    estimator: SmoothedEstimator,
}

impl NGramModel {
    /// Train on tokenized sentences.
    ///
    /// Words seen fewer than `min_frequency` times are replaced by the unknown
    /// marker before counting. The per-order tables are counted in parallel.
    pub fn train(sentences: &[Vec<String>], config: &LanguageModelConfig) -> Result<Self> {
        config.validate()?;

        let frequencies = FrequencyTable::from_sentences(sentences);
        let vocabulary = Vocabulary::from_frequencies(&frequencies, config.min_frequency);
        if vocabulary.is_empty() {
            return Err(WordsmithError::invalid_argument(format!(
                "no word occurs at least {} times; the vocabulary would be empty",
                config.min_frequency
            )));
        }

        let replaced = vocabulary.replace_oov(sentences);
        let tables = (config.min_order..=config.max_order)
            .into_par_iter()
            .map(|n| NGramCounts::count(&replaced, n))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "trained {}..={}-gram model on {} sentences with {} vocabulary words",
            config.min_order,
            config.max_order,
            sentences.len(),
            vocabulary.len()
        );

        NGramModel::from_parts(vocabulary, tables, config.clone())
    }

    /// Assemble a model from already-counted tables.
    ///
    /// `tables` must hold exactly the orders `min_order..=max_order` of
    /// `config`, lowest first.
    pub fn from_parts(
        vocabulary: Vocabulary,
        tables: Vec<NGramCounts>,
        config: LanguageModelConfig,
    ) -> Result<Self> {
        config.validate()?;
        if vocabulary.is_empty() {
            return Err(WordsmithError::invalid_argument(
                "cannot score against an empty vocabulary",
            ));
        }
        let orders: Vec<usize> = tables.iter().map(NGramCounts::order).collect();
        let expected: Vec<usize> = (config.min_order..=config.max_order).collect();
        if orders != expected {
            return Err(WordsmithError::invalid_argument(format!(
                "expected n-gram tables of orders {expected:?}, got {orders:?}"
            )));
        }

        let estimator = SmoothedEstimator::for_vocabulary(config.k, &vocabulary)?;
        Ok(NGramModel {
            config,
            vocabulary,
            tables,
            estimator,
        })
    }

    /// The configuration the model was built with.
    pub fn config(&self) -> &LanguageModelConfig {
        &self.config
    }

    /// The closed vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Count tables, lowest order first.
    pub fn tables(&self) -> &[NGramCounts] {
        &self.tables
    }

    /// The table of order `n`, if counted.
    pub fn table(&self, n: usize) -> Option<&NGramCounts> {
        self.tables.iter().find(|table| table.order() == n)
    }

    /// The smoothing estimator shared by every order.
    pub fn estimator(&self) -> &SmoothedEstimator {
        &self.estimator
    }

    /// `P(word | last n tokens)` for the order-`n` / order-`n + 1` tables.
    pub fn probability(&self, tokens: &[String], word: &str, n: usize) -> Result<f64> {
        let pair = self.pair(n)?;
        let window = suggest::context_window(tokens, n, &self.vocabulary);
        self.estimator.estimate(word, &window, pair)
    }

    /// Full next-word distribution for order `n`, in candidate pool order.
    pub fn distribution(&self, tokens: &[String], n: usize) -> Result<Vec<(String, f64)>> {
        let pair = self.pair(n)?;
        let window = suggest::context_window(tokens, n, &self.vocabulary);
        self.estimator.estimate_all(&window, pair, &self.vocabulary)
    }

    /// One suggestion per order pair, lowest order first.
    pub fn suggestions(&self, tokens: &[String], prefix: Option<&str>) -> Result<Vec<Suggestion>> {
        suggest::suggestions(
            tokens,
            &self.tables,
            &self.vocabulary,
            &self.estimator,
            prefix,
        )
    }

    /// The single best next word across all orders.
    pub fn next_word(&self, tokens: &[String], prefix: Option<&str>) -> Result<Option<(String, f64)>> {
        let suggestions = self.suggestions(tokens, prefix)?;
        Ok(suggest::best_suggestion(&suggestions))
    }

    /// Greedily extend `tokens` until a terminal status.
    pub fn complete(&self, tokens: Vec<String>) -> Result<Completion> {
        let mut completion = Completion::new(tokens, self.config.max_completion_steps);
        completion.run(self)?;
        Ok(completion)
    }

    fn pair(&self, n: usize) -> Result<NGramPair<'_>> {
        let lower = self.table(n);
        let higher = self.table(n + 1);
        match (lower, higher) {
            (Some(lower), Some(higher)) => NGramPair::new(lower, higher),
            _ => Err(WordsmithError::invalid_argument(format!(
                "no table pair starts at order {n}; windows of {}..={} tokens are supported",
                self.config.min_order,
                self.config.max_order - 1
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language_model::completion::CompletionStatus;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn config() -> LanguageModelConfig {
        LanguageModelConfig {
            min_frequency: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_train_builds_every_order() {
        let sentences = vec![tokens(&["i", "like", "tea"])];
        let model = NGramModel::train(&sentences, &config()).unwrap();

        let orders: Vec<usize> = model.tables().iter().map(|t| t.order()).collect();
        assert_eq!(orders, vec![3, 4, 5]);
        assert_eq!(model.vocabulary().len(), 3);
        assert_eq!(model.estimator().vocabulary_size(), 5);
    }

    #[test]
    fn test_rare_words_become_unknown() {
        let sentences = vec![
            tokens(&["the", "cat", "sat"]),
            tokens(&["the", "dog", "sat"]),
        ];
        let model = NGramModel::train(
            &sentences,
            &LanguageModelConfig {
                min_frequency: 2,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(!model.vocabulary().contains("cat"));
        let trigrams = model.table(3).unwrap();
        assert_eq!(trigrams.get(&tokens(&["<s>", "the", "<unk>"])), 2);
    }

    #[test]
    fn test_unseen_context_probability() {
        let sentences = vec![tokens(&["i", "like", "tea"])];
        let model = NGramModel::train(&sentences, &config()).unwrap();

        let p = model
            .probability(&tokens(&["tea", "tea", "tea"]), "like", 3)
            .unwrap();
        assert!((p - 1.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_probability_order_out_of_range() {
        let sentences = vec![tokens(&["i", "like", "tea"])];
        let model = NGramModel::train(&sentences, &config()).unwrap();

        assert!(model.probability(&tokens(&["i"]), "like", 5).is_err());
        assert!(model.distribution(&tokens(&["i"]), 2).is_err());
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let sentences = vec![tokens(&["once"])];
        let result = NGramModel::train(
            &sentences,
            &LanguageModelConfig {
                min_frequency: 2,
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(WordsmithError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let sentences = vec![tokens(&["a", "b"])];
        let result = NGramModel::train(
            &sentences,
            &LanguageModelConfig {
                k: 0.0,
                ..config()
            },
        );
        assert!(matches!(result, Err(WordsmithError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_parts_requires_consecutive_tables() {
        let sentences = vec![tokens(&["a", "b"])];
        let tables = vec![
            NGramCounts::count(&sentences, 2).unwrap(),
            NGramCounts::count(&sentences, 4).unwrap(),
        ];
        let vocab = Vocabulary::from_words(["a", "b"]);
        assert!(NGramModel::from_parts(vocab, tables, config()).is_err());
    }

    #[test]
    fn test_from_parts_requires_configured_orders() {
        let sentences = vec![tokens(&["a", "b"])];
        let count = |n| NGramCounts::count(&sentences, n).unwrap();
        let vocab = Vocabulary::from_words(["a", "b"]);

        let missing_top = vec![count(3), count(4)];
        let result = NGramModel::from_parts(vocab.clone(), missing_top, config());
        assert!(matches!(result, Err(WordsmithError::InvalidArgument(_))));

        let matching = vec![count(3), count(4), count(5)];
        let model = NGramModel::from_parts(vocab, matching, config()).unwrap();
        assert_eq!(model.tables().len(), 3);
        assert!(model.probability(&tokens(&["a"]), "b", 4).is_ok());
    }

    #[test]
    fn test_next_word_and_completion() {
        let sentences = vec![tokens(&["i", "like", "tea"]); 3];
        let model = NGramModel::train(&sentences, &config()).unwrap();

        let (word, probability) = model.next_word(&tokens(&["i", "like"]), None).unwrap().unwrap();
        assert_eq!(word, "tea");
        assert!((probability - 0.5).abs() < 1e-12);

        let completion = model.complete(tokens(&["i", "like"])).unwrap();
        assert_eq!(completion.tokens(), tokens(&["i", "like", "tea"]).as_slice());
        assert_eq!(completion.status(), CompletionStatus::EndOfSentence);
        assert_eq!(completion.steps(), 1);
    }
}
