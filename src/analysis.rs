//! Text preparation that feeds the probabilistic models.
//!
//! Splits raw text into sentences and word tokens, and builds the closed
//! vocabulary that maps rare words to the unknown marker. None of the scoring
//! code normalizes text on its own; it consumes what this module produces.

pub mod token;
pub mod tokenizer;
pub mod vocabulary;

pub use token::*;
pub use tokenizer::*;
pub use vocabulary::*;
