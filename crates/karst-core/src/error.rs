//! Error types for terrain construction and cell access.

use std::error::Error;
use std::fmt;

/// Rejections raised while building a terrain from row descriptions.
///
/// Construction is all-or-nothing: any malformed input fails the whole
/// build and no partially initialized terrain is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedTerrain {
    /// The description contains no rows at all.
    Empty,
    /// Rows are present but hold zero cells.
    ZeroWidth,
    /// A row's width differs from the width of row 0.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width actually found.
        found: usize,
    },
    /// A character other than `*` or `.` appeared in a row.
    InvalidGlyph {
        /// Row containing the glyph.
        row: usize,
        /// Column containing the glyph.
        col: usize,
        /// The unrecognized character.
        found: char,
    },
}

impl fmt::Display for MalformedTerrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain description has no rows"),
            Self::ZeroWidth => write!(f, "terrain rows must hold at least one cell"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has width {found}, expected {expected}")
            }
            Self::InvalidGlyph { row, col, found } => {
                write!(f, "invalid glyph {found:?} at ({row}, {col})")
            }
        }
    }
}

impl Error for MalformedTerrain {}

/// A cell access outside the terrain bounds.
///
/// Raised by indexed accessors; a contract violation by the caller, not a
/// recoverable runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Terrain row count.
    pub rows: usize,
    /// Terrain column count.
    pub cols: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell ({}, {}) out of bounds for a {}x{} terrain",
            self.row, self.col, self.rows, self.cols
        )
    }
}

impl Error for OutOfBounds {}
