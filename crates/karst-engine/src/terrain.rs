//! The [`Terrain`] aggregate: a grid, a step counter, and the most
//! recent connectivity survey.

use karst_core::{Cell, MalformedTerrain, OutOfBounds, Prediction};

use crate::connectivity::{self, ConnectivityReport, Witness};
use crate::erosion;
use crate::grid::Grid;
use crate::predict::{self, DEFAULT_HORIZON};

/// Outcome of a single erosion step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The step counter after the step, so the first step reports `1`.
    pub step: u64,
    /// Number of cells that eroded from solid to void during the step.
    pub eroded: usize,
}

/// An eroding terrain with its simulation clock.
///
/// A terrain owns a [`Grid`], a monotone step counter starting at zero,
/// and the witness from the most recent connectivity survey. The survey
/// runs eagerly at construction and on demand afterwards; stepping the
/// terrain leaves the stored witness stale until [`is_collapsed`] or
/// [`refresh_witness`] re-runs it.
///
/// [`is_collapsed`]: Terrain::is_collapsed
/// [`refresh_witness`]: Terrain::refresh_witness
#[derive(Clone, Debug)]
pub struct Terrain {
    grid: Grid,
    step: u64,
    report: ConnectivityReport,
    surveyed_at: u64,
}

impl Terrain {
    /// Build a terrain from glyph rows and survey it immediately.
    ///
    /// Each row is a string of `*` (solid) and `.` (void) glyphs. All
    /// rows must share one non-zero width.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTerrain`] when the description is empty,
    /// zero-width, ragged, or holds a glyph other than `*` and `.`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MalformedTerrain> {
        let grid = Grid::from_rows(rows)?;
        let report = connectivity::survey(&grid);
        Ok(Self {
            grid,
            step: 0,
            report,
            surveyed_at: 0,
        })
    }

    /// Terrain shape as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    /// Number of completed erosion steps.
    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// The cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when the coordinate falls outside the
    /// grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.grid.cell(row, col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// The cells one row slice at a time, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows_iter()
    }

    /// Number of solid cells remaining.
    pub fn solid_count(&self) -> usize {
        self.grid.solid_count()
    }

    /// Advance the terrain by one erosion step.
    ///
    /// Every solid cell with at least one void side among its in-grid
    /// up/down/left/right neighbours turns void, all at once, judged
    /// against the pre-step grid. The stored witness is stale after
    /// this returns.
    pub fn step(&mut self) -> StepReport {
        let eroded = erosion::erode(&mut self.grid);
        self.step += 1;
        StepReport {
            step: self.step,
            eroded,
        }
    }

    /// Whether no solid path connects the top row to the bottom row.
    ///
    /// Re-surveys the grid first if the terrain has stepped since the
    /// last survey, so the answer and the stored witness always match
    /// the current cells.
    pub fn is_collapsed(&mut self) -> bool {
        if self.surveyed_at != self.step {
            self.refresh_witness();
        }
        self.report.collapsed
    }

    /// Re-run the connectivity survey against the current cells.
    pub fn refresh_witness(&mut self) {
        self.report = connectivity::survey(&self.grid);
        self.surveyed_at = self.step;
    }

    /// The witness from the most recent survey.
    ///
    /// When the survey found a path this marks that path's search; when
    /// it found none it marks the last search attempted, or nothing at
    /// all if the top row had no solid cell to start from. The witness
    /// reflects the grid as of the last survey, not necessarily the
    /// current cells.
    pub fn witness(&self) -> &Witness {
        &self.report.witness
    }

    /// Forecast collapse within [`DEFAULT_HORIZON`] steps.
    ///
    /// Equivalent to
    /// [`predict_collapse_within(DEFAULT_HORIZON)`](Terrain::predict_collapse_within).
    pub fn predict_collapse(&self) -> Prediction {
        predict::forecast(self, DEFAULT_HORIZON)
    }

    /// Forecast collapse by stepping a private copy until it collapses
    /// or its step counter reaches `max_steps`.
    ///
    /// The bound is on the absolute step counter: a terrain already
    /// stepped `n` times forecasts at most `max_steps - n` further
    /// steps. The terrain itself is never mutated, and a terrain that
    /// is already collapsed reports `Collapse` at its current step
    /// regardless of the bound.
    pub fn predict_collapse_within(&self, max_steps: u64) -> Prediction {
        predict::forecast(self, max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(terrain: &Terrain) -> Vec<String> {
        terrain
            .rows()
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn construction_surveys_eagerly() {
        let t = Terrain::from_rows(&["*", "*"]).unwrap();
        assert!(t.witness().contains(0, 0));
        assert!(t.witness().contains(1, 0));
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(matches!(
            Terrain::from_rows(&["*", "**"]),
            Err(MalformedTerrain::RaggedRow {
                row: 1,
                expected: 1,
                found: 2,
            })
        ));
        assert!(matches!(
            Terrain::from_rows::<&str>(&[]),
            Err(MalformedTerrain::Empty)
        ));
    }

    // ── Stepping ─────────────────────────────────────────────────────

    #[test]
    fn step_reports_the_eroded_count() {
        let mut t = Terrain::from_rows(&["***", "*.*", "***"]).unwrap();
        let report = t.step();
        assert_eq!(report, StepReport { step: 1, eroded: 4 });
        assert_eq!(glyphs(&t), vec!["*.*", "...", "*.*"]);
    }

    #[test]
    fn step_counter_is_monotone() {
        let mut t = Terrain::from_rows(&["**", "**"]).unwrap();
        assert_eq!(t.step().step, 1);
        assert_eq!(t.step().step, 2);
        assert_eq!(t.step_count(), 2);
    }

    #[test]
    fn fixed_point_steps_report_zero_eroded() {
        let mut t = Terrain::from_rows(&["*.", ".*"]).unwrap();
        t.step();
        // Both cells went void on the first step; nothing is left.
        assert_eq!(t.step().eroded, 0);
        assert_eq!(t.solid_count(), 0);
    }

    // ── Collapse and the witness ─────────────────────────────────────

    #[test]
    fn is_collapsed_refreshes_a_stale_witness() {
        let mut t = Terrain::from_rows(&["*.*", "***", "*.*"]).unwrap();
        assert!(!t.is_collapsed());
        assert!(t.witness().contains(2, 0));

        let report = t.step();
        assert_eq!(report.eroded, 5);
        assert!(t.is_collapsed());
        // The top row is now empty, so the refreshed witness is blank.
        assert!(t.witness().is_empty());
    }

    #[test]
    fn is_collapsed_is_idempotent() {
        let mut t = Terrain::from_rows(&["**.", "***", "**."]).unwrap();
        let first = t.is_collapsed();
        let witness = t.witness().clone();
        assert_eq!(t.is_collapsed(), first);
        assert_eq!(t.witness(), &witness);
    }

    #[test]
    fn refresh_witness_tracks_the_current_cells() {
        let mut t = Terrain::from_rows(&["*.*", "***", "*.*"]).unwrap();
        t.step();
        // Stale witness still marks cells that have since eroded.
        assert!(t.witness().contains(0, 0));
        t.refresh_witness();
        assert!(!t.witness().contains(0, 0));
    }

    // ── Forecasting ──────────────────────────────────────────────────

    #[test]
    fn predict_never_mutates_the_terrain() {
        let t = Terrain::from_rows(&["**.", "***", "**."]).unwrap();
        let cells = t.cells().to_vec();
        assert_eq!(t.predict_collapse(), Prediction::Collapse { step: 2 });
        assert_eq!(t.cells(), cells.as_slice());
        assert_eq!(t.step_count(), 0);
    }

    #[test]
    fn predict_counts_absolute_steps() {
        let mut t = Terrain::from_rows(&["**.", "***", "**."]).unwrap();
        t.step();
        // One step in, the collapse is still reported against the
        // terrain's own clock.
        assert_eq!(t.predict_collapse_within(2), Prediction::Collapse { step: 2 });
        assert_eq!(t.predict_collapse_within(1), Prediction::Unknown);
    }

    #[test]
    fn zero_horizon_still_sees_an_existing_collapse() {
        let standing = Terrain::from_rows(&["*", "*"]).unwrap();
        assert_eq!(standing.predict_collapse_within(0), Prediction::Unknown);

        let fallen = Terrain::from_rows(&["*.", ".*"]).unwrap();
        assert_eq!(
            fallen.predict_collapse_within(0),
            Prediction::Collapse { step: 0 }
        );
    }
}
