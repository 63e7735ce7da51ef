//! N-gram language model with additive smoothing.
//!
//! [`ngram`] counts padded token windows, [`estimator`] turns a pair of
//! adjacent count tables into smoothed conditional probabilities, [`suggest`]
//! picks the most probable next word per order, and [`completion`] extends a
//! sentence greedily. [`model`] ties them to a trained vocabulary.

pub mod completion;
pub mod estimator;
pub mod model;
pub mod ngram;
pub mod suggest;

pub use completion::*;
pub use estimator::*;
pub use model::*;
pub use ngram::*;
pub use suggest::*;
