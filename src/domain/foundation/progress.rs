//! Progress value object (percentage, not clamped at the source).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived progress percentage.
///
/// Progress is `(current / target) * 100` and may exceed 100 when an
/// indicator overshoots its target. Values are clamped only for display
/// bars, never at the source.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Progress, flooring negatives at zero.
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    /// Derives progress from a current/target pair.
    ///
    /// Returns `None` when either value is missing or the target is not
    /// positive; an unmeasured indicator contributes no progress rather
    /// than zero.
    pub fn from_measurement(current: Option<f64>, target: Option<f64>) -> Option<Self> {
        match (current, target) {
            (Some(current), Some(target)) if target > 0.0 => {
                Some(Self::new((current / target) * 100.0))
            }
            _ => None,
        }
    }

    /// Returns the raw percentage value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value clamped to 0-100 for progress bars.
    pub fn display_value(&self) -> f64 {
        self.0.min(100.0)
    }

    /// Returns the value as a fraction (0.0 upward).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
