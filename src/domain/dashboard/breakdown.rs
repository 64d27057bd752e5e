//! Status-breakdown counter over leaf indicator statuses.

use serde::Serialize;

use crate::domain::foundation::RagStatus;
use crate::domain::rollup::OrgObjectiveHealth;

/// Tally of indicator statuses within some scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub green: usize,
    pub amber: usize,
    pub red: usize,
    pub not_set: usize,
}

impl StatusBreakdown {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies an iterator of statuses.
    pub fn from_statuses(statuses: impl IntoIterator<Item = RagStatus>) -> Self {
        let mut breakdown = Self::new();
        for status in statuses {
            breakdown.record(status);
        }
        breakdown
    }

    /// Adds one status to the tally.
    pub fn record(&mut self, status: RagStatus) {
        match status {
            RagStatus::Green => self.green += 1,
            RagStatus::Amber => self.amber += 1,
            RagStatus::Red => self.red += 1,
            RagStatus::NotSet => self.not_set += 1,
        }
    }

    /// Total number of tallied indicators.
    pub fn total(&self) -> usize {
        self.green + self.amber + self.red + self.not_set
    }

    /// Indicators that have been scored (anything but not-set).
    pub fn scored(&self) -> usize {
        self.green + self.amber + self.red
    }

    /// Indicators still awaiting data.
    pub fn pending(&self) -> usize {
        self.not_set
    }

    /// Share of indicators scored, as a percentage.
    ///
    /// `None` when the scope contains no indicators at all.
    pub fn completion_pct(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some(self.scored() as f64 / total as f64 * 100.0)
    }
}

/// Tallies the leaf indicator statuses of a rolled-up health tree.
pub fn leaf_status_breakdown(org_objectives: &[OrgObjectiveHealth]) -> StatusBreakdown {
    StatusBreakdown::from_statuses(
        org_objectives
            .iter()
            .flat_map(|org| &org.departments)
            .flat_map(|dep| &dep.functional_objectives)
            .flat_map(|fo| &fo.key_results)
            .flat_map(|kr| &kr.indicators)
            .map(|indicator| indicator.status),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_each_band() {
        let breakdown = StatusBreakdown::from_statuses([
            RagStatus::Green,
            RagStatus::Green,
            RagStatus::Amber,
            RagStatus::Red,
            RagStatus::NotSet,
        ]);
        assert_eq!(breakdown.green, 2);
        assert_eq!(breakdown.amber, 1);
        assert_eq!(breakdown.red, 1);
        assert_eq!(breakdown.not_set, 1);
        assert_eq!(breakdown.total(), 5);
        assert_eq!(breakdown.scored(), 4);
        assert_eq!(breakdown.pending(), 1);
    }

    #[test]
    fn completion_counts_scored_over_total() {
        let breakdown = StatusBreakdown::from_statuses([
            RagStatus::Green,
            RagStatus::Red,
            RagStatus::NotSet,
            RagStatus::NotSet,
        ]);
        assert_eq!(breakdown.completion_pct(), Some(50.0));
    }

    #[test]
    fn empty_scope_has_no_completion() {
        assert_eq!(StatusBreakdown::new().completion_pct(), None);
    }

    #[test]
    fn serializes_not_set_as_camel_case() {
        let json = serde_json::to_value(StatusBreakdown::new()).unwrap();
        assert!(json.get("notSet").is_some());
    }
}
