//! Benchmark profiles for the Karst terrain simulation.
//!
//! Provides pre-built terrains at the two sizes the benchmarks use:
//!
//! - [`reference_terrain`]: 100x100 grid (10K cells)
//! - [`stress_terrain`]: 316x316 grid (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use karst_engine::Terrain;
use karst_test_utils::random_terrain;

/// Solid density shared by the benchmark profiles.
///
/// Dense enough that early steps erode thousands of cells, porous
/// enough that the terrain keeps changing for many steps.
pub const PROFILE_DENSITY: f64 = 0.9;

/// Build the reference benchmark terrain: 100x100 grid (10K cells).
pub fn reference_terrain(seed: u64) -> Terrain {
    random_terrain(100, 100, PROFILE_DENSITY, seed)
}

/// Build the stress benchmark terrain: 316x316 grid (~100K cells).
///
/// Same density as [`reference_terrain`] at 10x the cell count.
pub fn stress_terrain(seed: u64) -> Terrain {
    random_terrain(316, 316, PROFILE_DENSITY, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_terrain_has_the_documented_shape() {
        assert_eq!(reference_terrain(42).dimensions(), (100, 100));
    }

    #[test]
    fn stress_terrain_has_the_documented_shape() {
        assert_eq!(stress_terrain(42).dimensions(), (316, 316));
    }

    #[test]
    fn profiles_are_seed_deterministic() {
        let a = reference_terrain(42);
        let b = reference_terrain(42);
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn profiles_start_busy() {
        // The first step must have real work to measure.
        let mut terrain = reference_terrain(42);
        assert!(terrain.step().eroded > 0);
    }
}
