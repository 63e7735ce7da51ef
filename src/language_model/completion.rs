//! Greedy sentence completion.
//!
//! A [`Completion`] holds the token sequence and step count. Each
//! [`Completion::step`] gathers one suggestion per n-gram order, merges them,
//! and appends the winner. The machine stops on the end marker, on three
//! identical trailing tokens, when no order suggests anything, or when the
//! step ceiling is reached.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::token::END_TOKEN;
use crate::error::Result;
use crate::language_model::model::NGramModel;
use crate::language_model::suggest::best_suggestion;

/// Number of identical trailing tokens treated as a runaway loop.
pub const REPETITION_WINDOW: usize = 3;

/// Where a completion is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// More words may be appended.
    Running,
    /// The end marker was the best next word.
    EndOfSentence,
    /// The last three tokens are identical.
    Repetition,
    /// The step ceiling was reached.
    StepLimit,
    /// No order produced a suggestion.
    NoSuggestion,
}

impl CompletionStatus {
    /// Whether no further step will change the sequence.
    pub fn is_terminal(self) -> bool {
        self != CompletionStatus::Running
    }
}

/// Greedy completion state: the sequence so far and how many words were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    tokens: Vec<String>,
    steps: usize,
    max_steps: usize,
    status: CompletionStatus,
}

impl Completion {
    /// Start completing `tokens`, appending at most `max_steps` words.
    pub fn new(tokens: Vec<String>, max_steps: usize) -> Self {
        let status = if max_steps == 0 {
            CompletionStatus::StepLimit
        } else if ends_in_repetition(&tokens) {
            CompletionStatus::Repetition
        } else {
            CompletionStatus::Running
        };

        Completion {
            tokens,
            steps: 0,
            max_steps,
            status,
        }
    }

    /// The sequence so far.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the completion, returning its sequence.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Words appended so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current status.
    pub fn status(&self) -> CompletionStatus {
        self.status
    }

    /// Perform one transition. Terminal states are left unchanged.
    pub fn step(&mut self, model: &NGramModel) -> Result<CompletionStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let suggestions = model.suggestions(&self.tokens, None)?;
        self.status = match best_suggestion(&suggestions) {
            None => CompletionStatus::NoSuggestion,
            Some((word, _)) if word == END_TOKEN => CompletionStatus::EndOfSentence,
            Some((word, probability)) => {
                debug!("completion step {}: {word:?} ({probability:.6})", self.steps + 1);
                self.tokens.push(word);
                self.steps += 1;

                if ends_in_repetition(&self.tokens) {
                    CompletionStatus::Repetition
                } else if self.steps >= self.max_steps {
                    CompletionStatus::StepLimit
                } else {
                    CompletionStatus::Running
                }
            }
        };

        if self.status.is_terminal() {
            debug!(
                "completion stopped after {} steps: {:?}",
                self.steps, self.status
            );
        }
        Ok(self.status)
    }

    /// Step until a terminal status.
    pub fn run(&mut self, model: &NGramModel) -> Result<CompletionStatus> {
        while !self.status.is_terminal() {
            self.step(model)?;
        }
        Ok(self.status)
    }
}

/// Whether the last [`REPETITION_WINDOW`] tokens exist and are all identical.
pub fn ends_in_repetition(tokens: &[String]) -> bool {
    if tokens.len() < REPETITION_WINDOW {
        return false;
    }
    let tail = &tokens[tokens.len() - REPETITION_WINDOW..];
    tail.iter().all(|token| token == &tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_ends_in_repetition() {
        assert!(!ends_in_repetition(&tokens(&["la", "la"])));
        assert!(ends_in_repetition(&tokens(&["sing", "la", "la", "la"])));
        assert!(!ends_in_repetition(&tokens(&["la", "la", "di"])));
        assert!(!ends_in_repetition(&[]));
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(
            Completion::new(tokens(&["a"]), 5).status(),
            CompletionStatus::Running
        );
        assert_eq!(
            Completion::new(tokens(&["a", "a", "a"]), 5).status(),
            CompletionStatus::Repetition
        );
        assert_eq!(
            Completion::new(tokens(&["a"]), 0).status(),
            CompletionStatus::StepLimit
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!CompletionStatus::Running.is_terminal());
        for status in [
            CompletionStatus::EndOfSentence,
            CompletionStatus::Repetition,
            CompletionStatus::StepLimit,
            CompletionStatus::NoSuggestion,
        ] {
            assert!(status.is_terminal());
        }
    }
}
