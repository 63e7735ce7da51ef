//! Exhaustive enumeration of words one or two atomic edits away.
//!
//! The four atomic edits are applied at every split of the word into a
//! `(left, right)` pair:
//!
//! - delete the first character of `right`
//! - swap the first two characters of `right`
//! - replace the first character of `right` with each alphabet letter
//! - insert each alphabet letter between `left` and `right`
//!
//! Two-edit sets are the union of one-edit expansions of every one-edit word,
//! so they may contain the original word and words already one edit away.

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;

/// The default alphabet, lowercase ASCII letters.
pub const ENGLISH_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A deduplicated, unordered set of candidate words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCandidateSet {
    words: AHashSet<String>,
}

impl EditCandidateSet {
    /// Whether `word` is reachable.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no candidate was produced.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate candidates in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Candidates in lexicographic order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().collect();
        words.sort_unstable();
        words
    }
}

impl FromIterator<String> for EditCandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        EditCandidateSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EditCandidateSet {
    type Item = String;
    type IntoIter = <AHashSet<String> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Generates edit candidates over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

impl EditGenerator {
    /// Create a generator over the given alphabet. Duplicate letters are dropped.
    pub fn new(alphabet: &str) -> Self {
        let mut letters: Vec<char> = Vec::new();
        for ch in alphabet.chars() {
            if !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        EditGenerator { alphabet: letters }
    }

    /// The letters used by replace and insert.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Every word obtained by deleting one character, in split order.
    pub fn deletes(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        (0..chars.len())
            .map(|i| {
                let mut edited = chars.clone();
                edited.remove(i);
                edited.into_iter().collect()
            })
            .collect()
    }

    /// Every word obtained by swapping two adjacent characters, in split order.
    pub fn swaps(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        (0..chars.len().saturating_sub(1))
            .map(|i| {
                let mut edited = chars.clone();
                edited.swap(i, i + 1);
                edited.into_iter().collect()
            })
            .collect()
    }

    /// Every distinct word obtained by replacing one character with an
    /// alphabet letter. The input word itself is never included.
    pub fn replaces(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut seen = AHashSet::new();
        let mut replaced = Vec::new();

        for i in 0..chars.len() {
            for &letter in &self.alphabet {
                let mut edited = chars.clone();
                edited[i] = letter;
                let candidate: String = edited.into_iter().collect();
                if candidate != word && seen.insert(candidate.clone()) {
                    replaced.push(candidate);
                }
            }
        }

        replaced
    }

    /// Every word obtained by inserting one alphabet letter at any position,
    /// including before the first and after the last character.
    ///
    /// Duplicates are kept, so the result has exactly
    /// `alphabet.len() * (len(word) + 1)` entries.
    pub fn inserts(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut inserted = Vec::with_capacity(self.alphabet.len() * (chars.len() + 1));

        for i in 0..=chars.len() {
            for &letter in &self.alphabet {
                let mut edited = chars.clone();
                edited.insert(i, letter);
                inserted.push(edited.into_iter().collect());
            }
        }

        inserted
    }

    fn extend_with_edits(&self, word: &str, out: &mut AHashSet<String>) {
        out.extend(self.deletes(word));
        out.extend(self.swaps(word));
        out.extend(self.replaces(word));
        out.extend(self.inserts(word));
    }

    /// All distinct words exactly one atomic edit away.
    pub fn edit_one(&self, word: &str) -> EditCandidateSet {
        let mut words = AHashSet::new();
        self.extend_with_edits(word, &mut words);
        EditCandidateSet { words }
    }

    /// All distinct words reachable in two atomic edits.
    ///
    /// This dominates the cost of spelling correction, so the second level is
    /// expanded in parallel.
    pub fn edit_two(&self, word: &str) -> EditCandidateSet {
        let first: Vec<String> = self.edit_one(word).into_iter().collect();

        let words = first
            .par_iter()
            .fold(AHashSet::new, |mut acc, edited| {
                self.extend_with_edits(edited, &mut acc);
                acc
            })
            .reduce(AHashSet::new, |mut a, mut b| {
                if a.len() < b.len() {
                    std::mem::swap(&mut a, &mut b);
                }
                a.extend(b);
                a
            });

        debug!(
            "expanded {:?} to {} one-edit and {} two-edit candidates",
            word,
            first.len(),
            words.len()
        );

        EditCandidateSet { words }
    }
}

impl Default for EditGenerator {
    fn default() -> Self {
        EditGenerator::new(ENGLISH_ALPHABET)
    }
}
