//! Weighted Levenshtein distance.
//!
//! The engine fills the full `(len(source) + 1) × (len(target) + 1)` table
//! rather than only returning the final cost, so callers can inspect or print
//! the alignment. Only insertion, deletion and replacement are scored here;
//! adjacent transpositions are produced by the candidate generator instead.

use std::cmp::min;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-operation costs for the edit-distance recurrence.
///
/// Replacement is free when the aligned characters are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost of inserting one target character.
    pub insertion: u32,
    /// Cost of deleting one source character.
    pub deletion: u32,
    /// Cost of replacing one source character with a different target character.
    pub replacement: u32,
}

impl CostModel {
    /// Create a cost model from explicit weights.
    pub fn new(insertion: u32, deletion: u32, replacement: u32) -> Self {
        CostModel {
            insertion,
            deletion,
            replacement,
        }
    }

    /// Classic Levenshtein weights: every operation costs 1.
    pub fn unit() -> Self {
        CostModel::new(1, 1, 1)
    }

    fn replacement_cost(&self, a: char, b: char) -> u64 {
        if a == b { 0 } else { self.replacement as u64 }
    }
}

impl Default for CostModel {
    /// Insert and delete cost 1, replace costs 2.
    fn default() -> Self {
        CostModel::new(1, 1, 2)
    }
}

/// The filled dynamic-programming table of a weighted edit distance.
///
/// Cell `(i, j)` holds the minimum cost of turning the first `i` characters of
/// the source into the first `j` characters of the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    source: Vec<char>,
    target: Vec<char>,
    cells: Vec<u64>,
}

impl DistanceMatrix {
    /// Compute the matrix for `source` → `target` under `costs`.
    #[allow(clippy::needless_range_loop)]
    pub fn compute(source: &str, target: &str, costs: &CostModel) -> Self {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let rows = source.len() + 1;
        let cols = target.len() + 1;

        let mut cells = vec![0u64; rows * cols];

        for i in 1..rows {
            cells[i * cols] = cells[(i - 1) * cols] + costs.deletion as u64;
        }
        for j in 1..cols {
            cells[j] = cells[j - 1] + costs.insertion as u64;
        }

        for i in 1..rows {
            for j in 1..cols {
                let deletion = cells[(i - 1) * cols + j] + costs.deletion as u64;
                let insertion = cells[i * cols + j - 1] + costs.insertion as u64;
                let replacement = cells[(i - 1) * cols + j - 1]
                    + costs.replacement_cost(source[i - 1], target[j - 1]);

                cells[i * cols + j] = min(min(deletion, insertion), replacement);
            }
        }

        DistanceMatrix {
            source,
            target,
            cells,
        }
    }

    /// Number of rows, `len(source) + 1`.
    pub fn rows(&self) -> usize {
        self.source.len() + 1
    }

    /// Number of columns, `len(target) + 1`.
    pub fn cols(&self) -> usize {
        self.target.len() + 1
    }

    /// Cost at cell `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row < self.rows() && col < self.cols() {
            Some(self.cells[row * self.cols() + col])
        } else {
            None
        }
    }

    /// One full row of the table, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[u64]> {
        self.cells.chunks(self.cols()).nth(row)
    }

    /// The table as nested rows, for serialization to presentation layers.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.cells.chunks(self.cols()).map(<[u64]>::to_vec).collect()
    }

    /// Minimum edit distance: the bottom-right cell.
    pub fn distance(&self) -> u64 {
        self.cells[self.cells.len() - 1]
    }

    /// Source characters, in order.
    pub fn source(&self) -> &[char] {
        &self.source
    }

    /// Target characters, in order.
    pub fn target(&self) -> &[char] {
        &self.target
    }
}

impl fmt::Display for DistanceMatrix {
    /// Renders the table with `#` standing for the empty prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1)
            .max(1);

        write!(f, "{:>width$}", "")?;
        for ch in std::iter::once('#').chain(self.target.iter().copied()) {
            write!(f, " {ch:>width$}")?;
        }
        writeln!(f)?;

        let labels = std::iter::once('#').chain(self.source.iter().copied());
        for (label, row) in labels.zip(self.cells.chunks(self.cols())) {
            write!(f, "{label:>width$}")?;
            for cell in row {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Minimum weighted edit distance between `source` and `target`.
pub fn min_edit_distance(source: &str, target: &str, costs: &CostModel) -> u64 {
    DistanceMatrix::compute(source, target, costs).distance()
}

/// Edit distance expressed as a percentage of the worst-case alignment.
///
/// The worst case is `min(len(source), len(target)) * replacement` plus the
/// length difference. Two strings whose worst case is zero are identical under
/// the cost model, so the percentage is 0.
pub fn distance_percentage(source: &str, target: &str, costs: &CostModel) -> f64 {
    let len_source = source.chars().count() as u64;
    let len_target = target.chars().count() as u64;
    let worst_case =
        len_source.min(len_target) * costs.replacement as u64 + len_source.abs_diff(len_target);

    if worst_case == 0 {
        return 0.0;
    }

    min_edit_distance(source, target, costs) as f64 / worst_case as f64 * 100.0
}

/// Complement of [`distance_percentage`].
pub fn similarity_percentage(source: &str, target: &str, costs: &CostModel) -> f64 {
    100.0 - distance_percentage(source, target, costs)
}

/// Round a percentage to two decimals for reporting.
pub fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
