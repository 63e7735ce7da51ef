//! Sentence splitting and word tokenization.
//!
//! # Examples
//!
//! ```
//! use wordsmith::analysis::TextTokenizer;
//! use wordsmith::config::TokenizerConfig;
//!
//! let tokenizer = TextTokenizer::new(TokenizerConfig::default()).unwrap();
//! let sentences = tokenizer.tokenize_text("It will take a little.\n\nRoom 101, please!");
//! assert_eq!(sentences[0], vec!["it", "will", "take", "a", "little"]);
//! assert_eq!(sentences[1], vec!["room", "please"]);
//! ```

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::TokenizerConfig;
use crate::error::{Result, WordsmithError};

const PUNCTUATION_PATTERN: &str = r"[\p{P}\p{S}]";
const DIGIT_PATTERN: &str = r"\p{Nd}";

/// Turns raw text into tokenized sentences.
#[derive(Clone, Debug)]
pub struct TextTokenizer {
    config: TokenizerConfig,
    punctuation: Regex,
    digits: Regex,
}

impl TextTokenizer {
    /// Create a tokenizer for the given cleaning options.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let punctuation = Regex::new(PUNCTUATION_PATTERN)
            .map_err(|e| WordsmithError::invalid_config(format!("Invalid regex pattern: {e}")))?;
        let digits = Regex::new(DIGIT_PATTERN)
            .map_err(|e| WordsmithError::invalid_config(format!("Invalid regex pattern: {e}")))?;

        Ok(TextTokenizer {
            config,
            punctuation,
            digits,
        })
    }

    /// The cleaning options in effect.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split text into one sentence per non-blank line, trimmed.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Clean and tokenize a single sentence.
    ///
    /// With punctuation stripping disabled, punctuation marks are emitted as
    /// tokens of their own.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut cleaned = sentence.to_string();
        if self.config.strip_punctuation {
            cleaned = self.punctuation.replace_all(&cleaned, "").into_owned();
        }
        if self.config.strip_digits {
            cleaned = self.digits.replace_all(&cleaned, "").into_owned();
        }
        if self.config.lowercase {
            cleaned = cleaned.to_lowercase();
        }

        if self.config.strip_punctuation {
            cleaned.unicode_words().map(str::to_string).collect()
        } else {
            cleaned
                .split_word_bounds()
                .filter(|segment| !segment.trim().is_empty())
                .map(str::to_string)
                .collect()
        }
    }

    /// Split text into sentences and tokenize each one, dropping sentences
    /// left without tokens.
    pub fn tokenize_text(&self, text: &str) -> Vec<Vec<String>> {
        self.split_sentences(text)
            .into_iter()
            .map(|sentence| self.tokenize(sentence))
            .filter(|tokens| !tokens.is_empty())
            .collect()
    }
}

/// Split sentences into a training prefix and a held-out suffix.
///
/// `train_ratio` is clamped to `[0, 1]`; the split point is rounded down.
pub fn split_train_test<T: Clone>(sentences: &[T], train_ratio: f64) -> (Vec<T>, Vec<T>) {
    let ratio = if train_ratio.is_nan() {
        0.0
    } else {
        train_ratio.clamp(0.0, 1.0)
    };
    let split = (sentences.len() as f64 * ratio) as usize;
    (sentences[..split].to_vec(), sentences[split..].to_vec())
}
