//! Batch terrain parsing, rendering, and forecast verification.
//!
//! Terrains arrive in plain-text batch files: a case count followed by
//! one shape header and glyph block per case. This crate reads those
//! batches, reads the matching expected-outcome files, renders terrains
//! (with or without the connectivity witness) back to text, and checks
//! forecasts against expectations.
//!
//! # Architecture
//!
//! - [`BatchReader`] decodes terrain cases from any `BufRead` source
//! - [`read_expected`] decodes expected collapse steps
//! - [`render_cells`] and [`render_witness`] format terrains as glyph rows
//! - [`verify_case`] and [`verify_batch`] compare forecasts to expectations
//!
//! # Batch format
//!
//! ```text
//! [case count]
//! [rows] [cols] [row 1] ... [row rows]   (per case, one item per line)
//! ```
//!
//! Every line is trimmed and every line counts; blank lines are not
//! skipped. Expected-outcome files carry one `index step` pair per
//! line, and there blank lines are ignored.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod render;
pub mod verify;

pub use error::BatchError;
pub use reader::{read_expected, BatchReader, CaseIter};
pub use render::{render_cells, render_witness, WITNESS_GLYPH};
pub use verify::{verify_batch, verify_case, BatchReport, CaseOutcome};
