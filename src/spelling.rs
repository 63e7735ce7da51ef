//! Edit distance and spelling correction.
//!
//! [`levenshtein`] scores how far apart two strings are, [`edits`] enumerates
//! every string a fixed number of edits away, [`dictionary`] turns a corpus
//! into counts and probabilities, and [`corrector`] combines them to rank
//! corrections for a misspelled word.

pub mod corpus;
pub mod corrector;
pub mod dictionary;
pub mod edits;
pub mod levenshtein;

pub use corpus::*;
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
pub use levenshtein::*;
