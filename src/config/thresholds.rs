//! RAG threshold configuration section

use serde::Deserialize;

use crate::domain::foundation::{RagThresholds, DEFAULT_AMBER_MIN, DEFAULT_GREEN_MIN};

use super::error::ValidationError;

/// Threshold bands for percentage-based RAG classification
///
/// Admin-editable per deployment; defaults to the documented bands
/// (green at 76, amber at 51).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdConfig {
    /// Lowest percentage classified green
    #[serde(default = "default_green_min")]
    pub green_min: f64,

    /// Lowest percentage classified amber
    #[serde(default = "default_amber_min")]
    pub amber_min: f64,
}

fn default_green_min() -> f64 {
    DEFAULT_GREEN_MIN
}

fn default_amber_min() -> f64 {
    DEFAULT_AMBER_MIN
}

impl ThresholdConfig {
    /// Validates range and band ordering.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&self.green_min) {
            return Err(ValidationError::ThresholdOutOfRange("green_min"));
        }
        if !(0.0..=100.0).contains(&self.amber_min) {
            return Err(ValidationError::ThresholdOutOfRange("amber_min"));
        }
        if self.amber_min > self.green_min {
            return Err(ValidationError::ThresholdBandsInverted);
        }
        Ok(())
    }

    /// Converts into the domain threshold table.
    pub fn to_domain(self) -> RagThresholds {
        RagThresholds {
            green_min: self.green_min,
            amber_min: self.amber_min,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            green_min: DEFAULT_GREEN_MIN,
            amber_min: DEFAULT_AMBER_MIN,
        }
    }
}
