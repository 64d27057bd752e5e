//! Key result record.

use serde::{Deserialize, Serialize};

use super::Indicator;
use crate::domain::foundation::KeyResultId;

/// A key result owning a set of indicators.
///
/// The optional `formula` controls how indicator progress rolls up into
/// this key result; display order of indicators is irrelevant to
/// aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    pub id: KeyResultId,
    /// Display name, also the reference name usable in parent formulas.
    pub name: String,
    /// Raw aggregation formula as entered by an admin, if any.
    pub formula: Option<String>,
    pub indicators: Vec<Indicator>,
    /// Relative weight for weighted roll-ups, when assigned.
    pub weight: Option<f64>,
}

impl KeyResult {
    /// Creates a key result with the default aggregation (plain average).
    pub fn new(name: impl Into<String>, indicators: Vec<Indicator>) -> Self {
        Self {
            id: KeyResultId::new(),
            name: name.into(),
            formula: None,
            indicators,
            weight: None,
        }
    }

    /// Sets the stored formula string.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Sets the roll-up weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns the indicators that carry a measurement.
    pub fn measured_indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter().filter(|i| i.is_measured())
    }
}
