//! Flat row-major storage for the terrain lattice.

use karst_core::{Cell, MalformedTerrain, OutOfBounds};
use smallvec::SmallVec;

/// Neighbour list for one cell: at most the four cardinal directions.
pub type NeighbourList = SmallVec<[(usize, usize); 4]>;

/// A rectangular lattice of [`Cell`]s.
///
/// Cells are stored in a flat buffer in row-major order; both dimensions
/// are at least 1 by construction. A second buffer of the same size is
/// kept so the erosion step can write the next state while reading the
/// current one.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row descriptions (`*` solid, `.` void).
    ///
    /// Every row must have the width of row 0, that width must be at
    /// least 1, and every character must be a valid glyph.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MalformedTerrain> {
        if rows.is_empty() {
            return Err(MalformedTerrain::Empty);
        }
        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            return Err(MalformedTerrain::ZeroWidth);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let width = text.chars().count();
            if width != cols {
                return Err(MalformedTerrain::RaggedRow {
                    row,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in text.chars().enumerate() {
                match Cell::from_glyph(ch) {
                    Some(cell) => cells.push(cell),
                    None => {
                        return Err(MalformedTerrain::InvalidGlyph {
                            row,
                            col,
                            found: ch,
                        })
                    }
                }
            }
        }
        let scratch = cells.clone();
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
            scratch,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Checked cell access.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        if row >= self.rows || col >= self.cols {
            return Err(OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as cell slices, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// The 4-connected neighbours of `(row, col)` that lie inside the
    /// grid, in up/down/left/right order.
    pub fn neighbours(&self, row: usize, col: usize) -> NeighbourList {
        let mut out = NeighbourList::new();
        if row > 0 {
            out.push((row - 1, col));
        }
        if row + 1 < self.rows {
            out.push((row + 1, col));
        }
        if col > 0 {
            out.push((row, col - 1));
        }
        if col + 1 < self.cols {
            out.push((row, col + 1));
        }
        out
    }

    /// Count of solid cells in the current state.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solid()).count()
    }

    /// Flat index of an in-bounds `(row, col)`.
    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `true` when the in-bounds cell `(row, col)` is solid.
    pub(crate) fn solid_at(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].is_solid()
    }

    /// Split borrow of the current buffer and the staging buffer.
    pub(crate) fn buffers_mut(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.cells, &mut self.scratch)
    }

    /// Promote the staging buffer to current.
    pub(crate) fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_rows_builds_row_major() {
        let g = Grid::from_rows(&["*.", ".*"]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 2);
        assert_eq!(g.cell_count(), 4);
        assert_eq!(
            g.cells(),
            &[Cell::Solid, Cell::Void, Cell::Void, Cell::Solid]
        );
    }

    #[test]
    fn from_rows_empty_input() {
        let rows: [&str; 0] = [];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(MalformedTerrain::Empty)
        ));
    }

    #[test]
    fn from_rows_zero_width() {
        assert!(matches!(
            Grid::from_rows(&[""]),
            Err(MalformedTerrain::ZeroWidth)
        ));
    }

    #[test]
    fn from_rows_ragged() {
        assert!(matches!(
            Grid::from_rows(&["**", "*"]),
            Err(MalformedTerrain::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn from_rows_rejects_foreign_glyphs() {
        assert!(matches!(
            Grid::from_rows(&["*x"]),
            Err(MalformedTerrain::InvalidGlyph {
                row: 0,
                col: 1,
                found: 'x'
            })
        ));
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn cell_checked_access() {
        let g = Grid::from_rows(&["*.", ".*"]).unwrap();
        assert_eq!(g.cell(0, 0), Ok(Cell::Solid));
        assert_eq!(g.cell(1, 0), Ok(Cell::Void));
        assert_eq!(
            g.cell(2, 0),
            Err(OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(g.cell(0, 2).is_err());
    }

    #[test]
    fn rows_iter_yields_each_row() {
        let g = Grid::from_rows(&["**", ".."]).unwrap();
        let rows: Vec<&[Cell]> = g.rows_iter().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Solid, Cell::Solid]);
        assert_eq!(rows[1], &[Cell::Void, Cell::Void]);
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn neighbours_interior_fixed_order() {
        let g = Grid::from_rows(&["***", "***", "***"]).unwrap();
        let n = g.neighbours(1, 1);
        // up, down, left, right
        assert_eq!(n.as_slice(), &[(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid::from_rows(&["***", "***", "***"]).unwrap();
        let n = g.neighbours(0, 0);
        assert_eq!(n.as_slice(), &[(1, 0), (0, 1)]);
    }

    #[test]
    fn neighbours_single_cell() {
        let g = Grid::from_rows(&["*"]).unwrap();
        assert!(g.neighbours(0, 0).is_empty());
    }

    // ── Counts ──────────────────────────────────────────────────

    #[test]
    fn solid_count_counts_solids() {
        let g = Grid::from_rows(&["*.", ".*"]).unwrap();
        assert_eq!(g.solid_count(), 2);
        let g = Grid::from_rows(&["..", ".."]).unwrap();
        assert_eq!(g.solid_count(), 0);
    }
}
