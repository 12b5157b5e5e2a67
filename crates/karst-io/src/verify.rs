//! Forecast verification against expected outcomes.
//!
//! A batch of terrains and a matching list of expected collapse steps
//! are checked case by case: each terrain's forecast must name exactly
//! the expected step. An `Unknown` forecast never matches, including
//! against expectations past the forecast horizon.

use karst_core::Prediction;
use karst_engine::Terrain;

use crate::error::BatchError;

/// Verdict for a single verified case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The forecast named the expected collapse step.
    Match {
        /// The agreed collapse step.
        step: u64,
    },
    /// The forecast disagreed with the expectation.
    Mismatch {
        /// The expected collapse step.
        expected: u64,
        /// What the forecast reported instead.
        predicted: Prediction,
    },
}

impl CaseOutcome {
    /// Whether this case passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Per-case verdicts for a verified batch.
#[derive(Clone, Debug)]
pub struct BatchReport {
    /// One verdict per case, in batch order.
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    /// Number of cases whose forecast matched.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of cases whose forecast disagreed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every case passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }
}

/// Check one terrain's forecast against its expected collapse step.
pub fn verify_case(terrain: &Terrain, expected: u64) -> CaseOutcome {
    match terrain.predict_collapse() {
        Prediction::Collapse { step } if step == expected => CaseOutcome::Match { step },
        predicted => CaseOutcome::Mismatch {
            expected,
            predicted,
        },
    }
}

/// Check a whole batch against its expected collapse steps.
///
/// # Errors
///
/// Returns [`BatchError::CaseCountMismatch`] when the two lists have
/// different lengths.
pub fn verify_batch(terrains: &[Terrain], expected: &[u64]) -> Result<BatchReport, BatchError> {
    if terrains.len() != expected.len() {
        return Err(BatchError::CaseCountMismatch {
            cases: terrains.len(),
            expected: expected.len(),
        });
    }
    let outcomes = terrains
        .iter()
        .zip(expected)
        .map(|(terrain, &step)| verify_case(terrain, step))
        .collect();
    Ok(BatchReport { outcomes })
}
