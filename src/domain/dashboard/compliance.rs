//! Customer score-compliance assessment.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::foundation::{CustomerId, FeatureId, IndicatorId, ReportingPeriod};
use crate::domain::hierarchy::{FeatureAssignment, IndicatorFeatureLink, ScoreRecord};

/// Whether a customer's expected scores were entered for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Complete,
    Partial,
    Pending,
}

/// Score-entry compliance for one customer in one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCompliance {
    pub customer_id: CustomerId,
    /// Indicator-feature links covered by the customer's assigned features.
    pub expected: usize,
    /// Distinct linked indicators with a score recorded in the period.
    pub filled: usize,
    pub status: ComplianceStatus,
}

/// Assesses one customer's score compliance for a period.
///
/// Expected is the number of indicator-feature links whose feature is
/// assigned to the customer; filled counts the distinct linked
/// indicators that received a score inside the period. Complete when
/// filled covers expected (and is non-zero), partial when something
/// but not everything arrived, pending when nothing did.
pub fn assess_customer(
    customer_id: CustomerId,
    assignments: &[FeatureAssignment],
    links: &[IndicatorFeatureLink],
    scores: &[ScoreRecord],
    period: &ReportingPeriod,
) -> CustomerCompliance {
    let assigned_features: HashSet<FeatureId> = assignments
        .iter()
        .filter(|a| a.customer_id == customer_id)
        .map(|a| a.feature_id)
        .collect();

    let covered_links: Vec<&IndicatorFeatureLink> = links
        .iter()
        .filter(|link| assigned_features.contains(&link.feature_id))
        .collect();
    let expected = covered_links.len();

    let linked_indicators: HashSet<IndicatorId> = covered_links
        .iter()
        .map(|link| link.indicator_id)
        .collect();
    let filled = scores
        .iter()
        .filter(|score| period.contains(score.recorded_on))
        .map(|score| score.indicator_id)
        .filter(|id| linked_indicators.contains(id))
        .collect::<HashSet<IndicatorId>>()
        .len();

    let status = if filled == 0 {
        ComplianceStatus::Pending
    } else if filled >= expected {
        ComplianceStatus::Complete
    } else {
        ComplianceStatus::Partial
    };

    CustomerCompliance {
        customer_id,
        expected,
        filled,
        status,
    }
}
