//! Horizon-bounded collapse forecasting.

use karst_core::Prediction;

use crate::terrain::Terrain;

/// Default forecast horizon, as a step-counter bound.
///
/// Some terrains never collapse (a one-cell-wide solid column has no
/// void-exposed face and never erodes at all), so the horizon guarantees
/// the forecast terminates, reporting [`Prediction::Unknown`] instead of
/// looping forever.
pub const DEFAULT_HORIZON: u64 = 100;

/// Step a private copy of `terrain` until it collapses or its step
/// counter reaches `max_steps`.
///
/// The collapse check runs before the horizon check, so a collapse
/// landing exactly on the horizon still reports
/// [`Prediction::Collapse`]. The input terrain is never touched.
pub(crate) fn forecast(terrain: &Terrain, max_steps: u64) -> Prediction {
    let mut copy = terrain.clone();
    loop {
        if copy.is_collapsed() {
            return Prediction::Collapse {
                step: copy.step_count(),
            };
        }
        if copy.step_count() >= max_steps {
            return Prediction::Unknown;
        }
        copy.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_never_collapses() {
        let t = Terrain::from_rows(&["*", "*", "*"]).unwrap();
        assert_eq!(forecast(&t, DEFAULT_HORIZON), Prediction::Unknown);
    }

    #[test]
    fn already_collapsed_reports_current_step() {
        let t = Terrain::from_rows(&["*.", ".*"]).unwrap();
        assert_eq!(forecast(&t, DEFAULT_HORIZON), Prediction::Collapse { step: 0 });
    }

    #[test]
    fn collapse_on_the_horizon_is_still_a_collapse() {
        // Collapses exactly at step 2: the notch erodes inward one
        // column per step until the top row empties.
        let t = Terrain::from_rows(&["**.", "***", "**."]).unwrap();
        assert_eq!(forecast(&t, 2), Prediction::Collapse { step: 2 });
        assert_eq!(forecast(&t, 1), Prediction::Unknown);
    }

    #[test]
    fn zero_horizon_on_standing_terrain_is_unknown() {
        let t = Terrain::from_rows(&["*", "*"]).unwrap();
        assert_eq!(forecast(&t, 0), Prediction::Unknown);
    }

    #[test]
    fn horizon_is_an_absolute_step_bound() {
        // A terrain stepped past the horizon reports Unknown without
        // stepping further.
        let mut t = Terrain::from_rows(&["*", "*"]).unwrap();
        t.step();
        t.step();
        let before = t.step_count();
        assert_eq!(forecast(&t, 1), Prediction::Unknown);
        assert_eq!(t.step_count(), before);
    }
}
