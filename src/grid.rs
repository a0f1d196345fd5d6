//! Dense score grid and the classical LCS recurrence.
//!
//! [`fill_grid`] is the base filler used both to build every precomputed block
//! and as the whole-input fallback when the padded length is too small to
//! block.

use crate::alphabet::Symbol;

/// Dense `(rows + 1) × (cols + 1)` grid of LCS scores, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl ScoreGrid {
    /// All-zero grid covering `rows` symbols of one sequence and `cols` of the other.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; (rows + 1) * (cols + 1)],
        }
    }

    /// Number of symbols along the row axis (the grid has `rows + 1` rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * (self.cols + 1) + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * (self.cols + 1) + j] = value;
    }

    /// Row `i` as a slice of `cols + 1` values.
    #[inline]
    pub fn row(&self, i: usize) -> &[u32] {
        let w = self.cols + 1;
        &self.cells[i * w..(i + 1) * w]
    }

    /// Column `j` copied out top to bottom.
    pub fn col(&self, j: usize) -> Vec<u32> {
        (0..=self.rows).map(|i| self.get(i, j)).collect()
    }

    /// Score at the bottom-right corner.
    #[inline]
    pub fn last(&self) -> u32 {
        self.get(self.rows, self.cols)
    }

    /// True when every horizontally or vertically adjacent pair differs by
    /// exactly 0 or 1 and the grid is non-decreasing along both axes.
    pub fn has_unit_steps(&self) -> bool {
        for i in 0..=self.rows {
            for j in 0..=self.cols {
                let here = self.get(i, j);
                if i > 0 && !is_unit_step(self.get(i - 1, j), here) {
                    return false;
                }
                if j > 0 && !is_unit_step(self.get(i, j - 1), here) {
                    return false;
                }
            }
        }
        true
    }
}

#[inline]
fn is_unit_step(prev: u32, next: u32) -> bool {
    next == prev || next == prev + 1
}

/// Fill the LCS grid for `a` (rows) against `b` (columns) from arbitrary
/// boundary values.
///
/// `first_row[j]` seeds cell `(0, j)` and `first_col[i]` seeds `(i, 0)`.
/// Interior cells follow
/// `score(i, j) = score(i-1, j-1) + 1` when `a[i-1]` matches `b[j-1]`,
/// otherwise `max(score(i-1, j), score(i, j-1))`.
///
/// # Panics
/// Panics if `first_row.len() != b.len() + 1`, `first_col.len() != a.len() + 1`
/// or the two boundaries disagree at the shared corner.
pub fn fill_grid(
    a: &[Symbol],
    b: &[Symbol],
    first_row: &[u32],
    first_col: &[u32],
) -> ScoreGrid {
    let rows = a.len();
    let cols = b.len();
    assert_eq!(first_row.len(), cols + 1, "first_row must cover every column");
    assert_eq!(first_col.len(), rows + 1, "first_col must cover every row");
    assert_eq!(first_row[0], first_col[0], "boundaries disagree at the corner");

    let mut grid = ScoreGrid::zeros(rows, cols);
    for (j, &value) in first_row.iter().enumerate() {
        grid.set(0, j, value);
    }
    for (i, &value) in first_col.iter().enumerate() {
        grid.set(i, 0, value);
    }

    let w = cols + 1;
    for i in 1..=rows {
        let ch = a[i - 1];
        for j in 1..=cols {
            let diag = grid.cells[(i - 1) * w + j - 1];
            grid.cells[i * w + j] = if ch.matches(b[j - 1]) {
                diag + 1
            } else {
                let up = grid.cells[(i - 1) * w + j];
                let left = grid.cells[i * w + j - 1];
                up.max(left)
            };
        }
    }
    grid
}
