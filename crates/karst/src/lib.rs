//! Karst: a terrain erosion simulation with collapse forecasting.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Karst sub-crates. For most users, adding `karst` as a
//! single dependency is sufficient.
//!
//! A terrain is a rectangular grid of solid (`*`) and void (`.`)
//! cells. Each step, every solid cell with a void among its in-grid
//! orthogonal neighbours erodes away, all at once. The terrain has
//! collapsed once no 4-connected chain of solid cells joins the top
//! row to the bottom row.
//!
//! # Quick start
//!
//! ```rust
//! use karst::prelude::*;
//!
//! // Corner towers on a central crossbeam. The left column carries a
//! // top-to-bottom path, so the terrain starts out standing.
//! let mut terrain = Terrain::from_rows(&["*.*", "***", "*.*"]).unwrap();
//! assert!(!terrain.is_collapsed());
//!
//! // Every face is exposed somewhere; the forecast sees one step left.
//! assert_eq!(terrain.predict_collapse(), Prediction::Collapse { step: 1 });
//!
//! // Step it by hand and watch the forecast come true.
//! let report = terrain.step();
//! assert_eq!(report.eroded, 5);
//! assert!(terrain.is_collapsed());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `karst-core` | Cell states, forecast outcomes, error types |
//! | [`engine`] | `karst-engine` | Terrain, erosion, connectivity surveys, forecasting |
//! | [`io`] | `karst-io` | Batch parsing, rendering, forecast verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell states, forecast outcomes, and error types (`karst-core`).
///
/// Contains the [`types::Cell`] alphabet with its glyph mapping, the
/// [`types::Prediction`] forecast outcome, and the
/// [`types::MalformedTerrain`] / [`types::OutOfBounds`] errors.
pub use karst_core as types;

/// Terrain simulation (`karst-engine`).
///
/// [`engine::Terrain`] owns the grid, the step counter, and the
/// connectivity witness; [`engine::survey`] runs the top-to-bottom
/// search on a bare [`engine::Grid`].
pub use karst_engine as engine;

/// Batch parsing, rendering, and forecast verification (`karst-io`).
///
/// Read terrain batches with [`io::BatchReader`], render them with
/// [`io::render_cells`] / [`io::render_witness`], and check forecasts
/// with [`io::verify_batch`].
pub use karst_io as io;

/// Common imports for typical Karst usage.
///
/// ```rust
/// use karst::prelude::*;
/// ```
///
/// This imports the terrain type and its reports, the forecast
/// outcome, the survey entry points, and the batch I/O helpers.
pub mod prelude {
    // Core types
    pub use karst_core::{Cell, MalformedTerrain, OutOfBounds, Prediction};

    // Simulation
    pub use karst_engine::{
        survey, ConnectivityReport, StepReport, Terrain, Witness, DEFAULT_HORIZON,
    };

    // Batch I/O and verification
    pub use karst_io::{
        read_expected, render_cells, render_witness, verify_batch, verify_case, BatchError,
        BatchReader, BatchReport, CaseOutcome,
    };
}
