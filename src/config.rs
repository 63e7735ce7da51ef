//! Configuration for tokenization, spelling correction and the language model.
//!
//! Every section has a `Default` and deserializes with missing fields filled
//! from it, so a config file only needs the values it overrides:
//!
//! ```
//! use wordsmith::config::Config;
//!
//! let config: Config = serde_json::from_str(r#"{"language_model": {"k": 0.5}}"#).unwrap();
//! assert_eq!(config.language_model.k, 0.5);
//! assert_eq!(config.language_model.min_order, 3);
//! assert!(config.validate().is_ok());
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsmithError};
use crate::spelling::edits::ENGLISH_ALPHABET;

/// Options for turning raw text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Lowercase every token.
    pub lowercase: bool,
    /// Remove punctuation and symbols instead of emitting them as tokens.
    pub strip_punctuation: bool,
    /// Remove decimal digits.
    pub strip_digits: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            lowercase: true,
            strip_punctuation: true,
            strip_digits: true,
        }
    }
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum number of corrections to return.
    pub max_suggestions: usize,
    /// Letters used by the replace and insert edits.
    pub alphabet: String,
    /// Minimum corpus count for a word to be a correction target.
    pub min_frequency: u64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_suggestions: 3,
            alphabet: ENGLISH_ALPHABET.to_string(),
            min_frequency: 1,
        }
    }
}

impl CorrectorConfig {
    /// Reject settings that cannot produce candidates.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(WordsmithError::invalid_config(
                "corrector alphabet must not be empty",
            ));
        }
        Ok(())
    }
}

/// Configuration for the n-gram language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageModelConfig {
    /// Smallest n-gram order counted.
    pub min_order: usize,
    /// Largest n-gram order counted. Suggestions pair each order with the
    /// next one, so `max_order` must exceed `min_order`.
    pub max_order: usize,
    /// Additive smoothing constant.
    pub k: f64,
    /// Minimum corpus count for a word to enter the closed vocabulary.
    pub min_frequency: u64,
    /// Hard ceiling on words appended by one completion.
    pub max_completion_steps: usize,
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        LanguageModelConfig {
            min_order: 3,
            max_order: 5,
            k: 1.0,
            min_frequency: 2,
            max_completion_steps: 50,
        }
    }
}

impl LanguageModelConfig {
    /// Reject orders and smoothing constants that make estimation undefined.
    pub fn validate(&self) -> Result<()> {
        if self.min_order == 0 {
            return Err(WordsmithError::invalid_config(
                "n-gram orders must be at least 1",
            ));
        }
        if self.max_order <= self.min_order {
            return Err(WordsmithError::invalid_config(format!(
                "max_order ({}) must be greater than min_order ({})",
                self.max_order, self.min_order
            )));
        }
        validate_smoothing(self.k)?;
        if self.max_completion_steps == 0 {
            return Err(WordsmithError::invalid_config(
                "max_completion_steps must be positive",
            ));
        }
        Ok(())
    }
}

/// Reject a smoothing constant that is not a finite positive number.
pub fn validate_smoothing(k: f64) -> Result<()> {
    if !(k.is_finite() && k > 0.0) {
        return Err(WordsmithError::invalid_config(format!(
            "smoothing constant k must be positive and finite, got {k}"
        )));
    }
    Ok(())
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub corrector: CorrectorConfig,
    pub language_model: LanguageModelConfig,
}

impl Config {
    /// Load and validate a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.corrector.validate()?;
        self.language_model.validate()
    }
}
