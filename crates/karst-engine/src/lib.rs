//! Erosion engine for Karst terrains.
//!
//! [`Terrain`] owns a rectangular cell lattice, a step counter, and the
//! [`Witness`] of the most recent connectivity survey. Each call to
//! [`Terrain::step`] applies the synchronous erosion rule: every solid
//! cell with at least one orthogonal void neighbour turns void, with all
//! decisions read from the pre-step lattice. [`survey`] decides whether a
//! solid 4-connected chain still joins the top row to the bottom row, and
//! [`Terrain::predict_collapse`] forecasts the collapse step on a private
//! copy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod erosion;
pub mod grid;
pub mod predict;
pub mod terrain;

#[cfg(test)]
pub(crate) mod strategies;

pub use connectivity::{survey, ConnectivityReport, Witness};
pub use grid::Grid;
pub use predict::DEFAULT_HORIZON;
pub use terrain::{StepReport, Terrain};
