//! Error types for batch parsing and verification.

use std::fmt;
use std::io;

use karst_core::MalformedTerrain;

/// Errors that can occur while reading or verifying a terrain batch.
#[derive(Debug)]
pub enum BatchError {
    /// An I/O error occurred while reading.
    Io(io::Error),
    /// The input ended before the named item could be read.
    UnexpectedEof {
        /// What the reader was looking for when the input ran out.
        expected: &'static str,
    },
    /// A line that should hold a number held something else.
    InvalidCount {
        /// One-based line number in the input.
        line: u64,
        /// The offending line, trimmed.
        text: String,
    },
    /// A case's rows disagree with the column count its header declared.
    ShapeMismatch {
        /// One-based case number in the batch.
        case: usize,
        /// Column count from the case header.
        declared: usize,
        /// Width of the first disagreeing row.
        found: usize,
    },
    /// A case's glyph block does not describe a valid terrain.
    Terrain {
        /// One-based case number in the batch.
        case: usize,
        /// The underlying terrain error.
        source: MalformedTerrain,
    },
    /// A batch and its expected outcomes have different lengths.
    CaseCountMismatch {
        /// Number of cases in the batch.
        cases: usize,
        /// Number of expected outcomes.
        expected: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "input ended while reading {expected}")
            }
            Self::InvalidCount { line, text } => {
                write!(f, "line {line}: expected a number, found {text:?}")
            }
            Self::ShapeMismatch {
                case,
                declared,
                found,
            } => {
                write!(
                    f,
                    "case {case}: header declares {declared} columns but a row has {found}"
                )
            }
            Self::Terrain { case, source } => write!(f, "case {case}: {source}"),
            Self::CaseCountMismatch { cases, expected } => {
                write!(
                    f,
                    "batch holds {cases} cases but {expected} outcomes were expected"
                )
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Terrain { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for BatchError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
