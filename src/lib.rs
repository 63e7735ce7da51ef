//! # Wordsmith
//!
//! Probabilistic text tools: edit distance, spelling correction and n-gram
//! next-word prediction.
//!
//! ## Features
//!
//! - Weighted minimum edit distance with the full cost matrix
//! - Exhaustive one- and two-edit candidate generation
//! - Corpus-frequency spelling correction with persisted snapshots
//! - k-smoothed n-gram language model with suggestion and greedy completion

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod language_model;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::{TextTokenizer, Vocabulary};
    pub use crate::config::{Config, CorrectorConfig, LanguageModelConfig, TokenizerConfig};
    pub use crate::error::{Result, WordsmithError};
    pub use crate::language_model::{Completion, CompletionStatus, NGramModel, Suggestion};
    pub use crate::spelling::{
        CorpusModel, CostModel, DistanceMatrix, EditGenerator, SpellCheck, SpellingCorrector,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
