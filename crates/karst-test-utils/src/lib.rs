//! Terrain fixtures and generators for Karst development.
//!
//! Hand-built terrains with known erosion behaviour, plus a seeded
//! random generator for stress and bench workloads. Each fixture
//! documents when (or whether) it collapses, so tests can assert
//! exact steps against it.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use karst_core::Cell;
use karst_engine::Terrain;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A `rows` x `cols` block of solid cells.
///
/// No cell has a void side, so the block never erodes and never
/// collapses. Both dimensions must be at least 1.
pub fn all_solid(rows: usize, cols: usize) -> Terrain {
    let row: String = (0..cols).map(|_| Cell::SOLID_GLYPH).collect();
    Terrain::from_rows(&vec![row; rows]).unwrap()
}

/// A single solid column of `rows` cells.
///
/// A one-cell-wide column has no left or right neighbours inside the
/// grid, so it never erodes and never collapses. `rows` must be at
/// least 1.
pub fn pillar(rows: usize) -> Terrain {
    Terrain::from_rows(&vec![String::from("*"); rows]).unwrap()
}

/// Two solid cells touching only at a corner.
///
/// Corner contact is not adjacency, so this terrain is collapsed
/// before any erosion: `predict_collapse` reports step 0.
pub fn diagonal() -> Terrain {
    Terrain::from_rows(&["*.", ".*"]).unwrap()
}

/// A 3x3 block with a notch down its right side.
///
/// The notch eats one column per step; the top row empties on the
/// second step, so the terrain collapses at exactly step 2.
pub fn undercut() -> Terrain {
    Terrain::from_rows(&["**.", "***", "**."]).unwrap()
}

/// Two massifs on a 4x13 field, one undercut and one free-standing.
///
/// The first step strips every exposed face; the second undercuts the
/// left massif short of the bottom row and beheads the right pillar
/// below the top row. Collapses at exactly step 2.
pub fn ridgeline() -> Terrain {
    Terrain::from_rows(&[
        "*****..***...",
        "*****.*****..",
        "*****.*****..",
        ".***..*****..",
    ])
    .unwrap()
}

/// A seeded random terrain of `rows` x `cols` cells.
///
/// Each cell is solid with probability `solid_density` (which must lie
/// in `0.0..=1.0`), drawn from a ChaCha8 stream so the same seed always
/// produces the same terrain.
pub fn random_terrain(rows: usize, cols: usize, solid_density: f64, seed: u64) -> Terrain {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<String> = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(solid_density) {
                        Cell::SOLID_GLYPH
                    } else {
                        Cell::VOID_GLYPH
                    }
                })
                .collect()
        })
        .collect();
    Terrain::from_rows(&rows).unwrap()
}
