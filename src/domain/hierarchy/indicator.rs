//! Indicator (KPI) record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IndicatorId, Progress};

/// A measured metric with a current value and a target value.
///
/// An indicator is "measured" only when both values are present and the
/// target is positive. An unmeasured indicator is excluded from every
/// aggregate; it never counts as 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: IndicatorId,
    /// Display name, also the reference name usable in parent formulas.
    pub name: String,
    pub current_value: Option<f64>,
    pub target_value: Option<f64>,
    pub unit: Option<String>,
    /// Relative weight for weighted roll-ups, when assigned.
    pub weight: Option<f64>,
}

impl Indicator {
    /// Creates an indicator with both values set.
    pub fn new(name: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            id: IndicatorId::new(),
            name: name.into(),
            current_value: Some(current),
            target_value: Some(target),
            unit: None,
            weight: None,
        }
    }

    /// Creates an indicator with no recorded values yet.
    pub fn unmeasured(name: impl Into<String>) -> Self {
        Self {
            id: IndicatorId::new(),
            name: name.into(),
            current_value: None,
            target_value: None,
            unit: None,
            weight: None,
        }
    }

    /// Sets the unit of measure.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sets the roll-up weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns true when both values are present and the target is positive.
    pub fn is_measured(&self) -> bool {
        self.measured_progress().is_some()
    }

    /// Derives this indicator's progress, or `None` when unmeasured.
    pub fn measured_progress(&self) -> Option<Progress> {
        Progress::from_measurement(self.current_value, self.target_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_indicator_reports_progress() {
        let ind = Indicator::new("Monthly active users", 80.0, 100.0);
        assert!(ind.is_measured());
        assert_eq!(ind.measured_progress().unwrap().value(), 80.0);
    }

    #[test]
    fn unmeasured_indicator_reports_none() {
        let ind = Indicator::unmeasured("Churn rate");
        assert!(!ind.is_measured());
        assert!(ind.measured_progress().is_none());
    }

    #[test]
    fn zero_target_counts_as_unmeasured() {
        let ind = Indicator::new("Deploys", 5.0, 0.0);
        assert!(!ind.is_measured());
    }

    #[test]
    fn negative_target_counts_as_unmeasured() {
        let ind = Indicator::new("Deploys", 5.0, -10.0);
        assert!(!ind.is_measured());
    }

    #[test]
    fn overshoot_is_not_clamped() {
        let ind = Indicator::new("Signups", 150.0, 100.0);
        assert_eq!(ind.measured_progress().unwrap().value(), 150.0);
    }

    #[test]
    fn builder_setters_store_metadata() {
        let ind = Indicator::new("NPS", 40.0, 50.0)
            .with_unit("points")
            .with_weight(2.0);
        assert_eq!(ind.unit.as_deref(), Some("points"));
        assert_eq!(ind.weight, Some(2.0));
    }
}
