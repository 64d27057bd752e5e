//! Admin-configurable RAG threshold bands.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default lower bound of the green band.
pub const DEFAULT_GREEN_MIN: f64 = 76.0;

/// Default lower bound of the amber band.
pub const DEFAULT_AMBER_MIN: f64 = 51.0;

/// Threshold table for percentage-based RAG classification.
///
/// A progress value is green at or above `green_min`, amber at or above
/// `amber_min`, and red below that. Deployments may override the bands;
/// the defaults are 76 and 51. Thresholds are threaded explicitly into
/// classification rather than read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RagThresholds {
    pub green_min: f64,
    pub amber_min: f64,
}

impl RagThresholds {
    /// Creates a threshold table, validating band ordering and range.
    pub fn try_new(green_min: f64, amber_min: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&green_min) {
            return Err(ValidationError::out_of_range("green_min", 0.0, 100.0, green_min));
        }
        if !(0.0..=100.0).contains(&amber_min) {
            return Err(ValidationError::out_of_range("amber_min", 0.0, 100.0, amber_min));
        }
        if amber_min > green_min {
            return Err(ValidationError::invalid_format(
                "thresholds",
                "amber_min must not exceed green_min",
            ));
        }
        Ok(Self { green_min, amber_min })
    }
}

impl Default for RagThresholds {
    fn default() -> Self {
        Self {
            green_min: DEFAULT_GREEN_MIN,
            amber_min: DEFAULT_AMBER_MIN,
        }
    }
}
