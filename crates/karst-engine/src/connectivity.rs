//! Top-to-bottom connectivity surveys.
//!
//! A terrain holds as long as some 4-connected chain of solid cells joins
//! row 0 to the last row. [`survey`] runs a depth-first search from each
//! solid top-row cell, left to right, and stops at the first search that
//! reaches the bottom row. The visited set of the search that produced
//! the verdict is kept as the [`Witness`] for rendering.

use crate::grid::Grid;

/// Cells visited by a connectivity survey.
///
/// A boolean mask with the dimensions of the surveyed grid. Derived
/// state: re-running the survey on an unchanged grid yields an identical
/// mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    rows: usize,
    cols: usize,
    visited: Vec<bool>,
}

impl Witness {
    /// An all-false mask of the given shape.
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            visited: vec![false; rows * cols],
        }
    }

    /// `(rows, cols)` of the mask.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `(row, col)` was visited. `false` outside the mask.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.visited[row * self.cols + col]
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// `true` when no cell was visited.
    pub fn is_empty(&self) -> bool {
        !self.visited.iter().any(|&v| v)
    }

    fn mark(&mut self, row: usize, col: usize) {
        self.visited[row * self.cols + col] = true;
    }

    fn is_marked(&self, row: usize, col: usize) -> bool {
        self.visited[row * self.cols + col]
    }
}

/// Outcome of a connectivity survey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityReport {
    /// `true` when no solid top-to-bottom chain exists.
    pub collapsed: bool,
    /// Visited set of the search that produced the verdict: the first
    /// successful search, else the last attempted one, else all-false
    /// when row 0 holds no solid cell.
    pub witness: Witness,
}

/// Survey `grid` for a solid 4-connected chain from row 0 to the last row.
///
/// Deterministic: top-row seeds are tried in column order and each search
/// expands neighbours in a fixed order, so equal grids always yield equal
/// reports. A single-row grid with any solid cell is connected: the seed
/// already sits in the last row.
pub fn survey(grid: &Grid) -> ConnectivityReport {
    let last_row = grid.rows() - 1;
    let mut witness = Witness::blank(grid.rows(), grid.cols());
    for seed_col in 0..grid.cols() {
        if !grid.solid_at(0, seed_col) {
            continue;
        }
        let mut attempt = Witness::blank(grid.rows(), grid.cols());
        if descends(grid, seed_col, last_row, &mut attempt) {
            return ConnectivityReport {
                collapsed: false,
                witness: attempt,
            };
        }
        witness = attempt;
    }
    ConnectivityReport {
        collapsed: true,
        witness,
    }
}

/// Depth-first search over solid cells seeded at `(0, seed_col)`.
///
/// Iterative with an explicit work stack: terrain height is unbounded and
/// the search must not be limited by the call stack. Cells are marked
/// when pushed, so each is expanded at most once per search.
fn descends(grid: &Grid, seed_col: usize, last_row: usize, visited: &mut Witness) -> bool {
    let mut stack: Vec<(usize, usize)> = vec![(0, seed_col)];
    visited.mark(0, seed_col);
    while let Some((row, col)) = stack.pop() {
        if row == last_row {
            return true;
        }
        for (nr, nc) in grid.neighbours(row, col) {
            if !visited.is_marked(nr, nc) && grid.solid_at(nr, nc) {
                visited.mark(nr, nc);
                stack.push((nr, nc));
            }
        }
    }
    false
}
