//! Outcome of a collapse forecast.

use std::fmt;

/// Result of forecasting collapse on a private terrain copy.
///
/// [`Unknown`](Prediction::Unknown) is a real outcome, not an error: a
/// terrain that still holds a top-to-bottom chain when the forecast
/// horizon is reached reports `Unknown` rather than a step count. The two
/// cases are distinct variants so callers cannot conflate `Unknown` with
/// a collapse at step 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prediction {
    /// The terrain is collapsed once its step counter reaches `step`.
    Collapse {
        /// Step counter value of the first collapsed state observed.
        step: u64,
    },
    /// No collapse was observed within the forecast horizon.
    Unknown,
}

impl Prediction {
    /// The collapse step, or `None` for [`Prediction::Unknown`].
    pub fn step(self) -> Option<u64> {
        match self {
            Self::Collapse { step } => Some(step),
            Self::Unknown => None,
        }
    }

    /// `true` when the horizon ran out before a collapse was seen.
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collapse { step } => write!(f, "collapse at step {step}"),
            Self::Unknown => write!(f, "no collapse within horizon"),
        }
    }
}
