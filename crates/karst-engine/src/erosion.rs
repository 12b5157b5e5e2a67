//! The synchronous erosion rule.
//!
//! Each step reads the whole pre-step lattice and writes the next state
//! into a second buffer: a solid cell with at least one orthogonal void
//! neighbour turns void; every other cell carries over. Neighbours
//! outside the grid do not count as void, so the border never erodes from
//! outside and a fully solid lattice is a fixed point.

use karst_core::Cell;

use crate::grid::Grid;

/// Apply one erosion step to `grid`, returning how many cells turned void.
///
/// Synchronous update: every decision reads the state the grid held when
/// the call began, so a cell eroded this step cannot expose its
/// neighbours until the next step. The buffers swap on completion.
pub fn erode(grid: &mut Grid) -> usize {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut eroded = 0;
    {
        let (current, next) = grid.buffers_mut();
        for row in 0..rows {
            for col in 0..cols {
                let idx = row * cols + col;
                let cell = current[idx];
                next[idx] = if cell.is_solid() && exposed(current, rows, cols, row, col) {
                    eroded += 1;
                    Cell::Void
                } else {
                    cell
                };
            }
        }
    }
    grid.swap_buffers();
    eroded
}

/// Whether any in-grid orthogonal neighbour of `(row, col)` is void.
fn exposed(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> bool {
    let void_at = |r: usize, c: usize| cells[r * cols + c].is_void();
    (row > 0 && void_at(row - 1, col))
        || (row + 1 < rows && void_at(row + 1, col))
        || (col > 0 && void_at(row, col - 1))
        || (col + 1 < cols && void_at(row, col + 1))
}
