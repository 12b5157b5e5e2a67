//! Core types for the Karst terrain simulation.
//!
//! This is the leaf crate with zero dependencies. It defines the cell
//! state alphabet, the forecast outcome type, and the error types shared
//! across the Karst workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod prediction;

pub use cell::Cell;
pub use error::{MalformedTerrain, OutOfBounds};
pub use prediction::Prediction;
