//! Filter/scope reducer over hierarchy snapshots.

use std::collections::HashSet;

use crate::domain::foundation::{
    CustomerId, DepartmentId, FeatureId, IndicatorId, RagStatus, RagThresholds, ReportingPeriod,
};
use crate::domain::hierarchy::{
    FeatureAssignment, HierarchySnapshot, Indicator, IndicatorFeatureLink, ScoreRecord,
};
use crate::domain::rag::progress_to_rag;

/// Engagement data a filter may need to resolve customer, feature, and
/// period scopes down to indicator identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeContext<'a> {
    pub assignments: &'a [FeatureAssignment],
    pub links: &'a [IndicatorFeatureLink],
    pub scores: &'a [ScoreRecord],
}

impl<'a> ScopeContext<'a> {
    /// A context with no engagement data; customer, feature, and period
    /// filters then match nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Role- and UI-selected scope applied before aggregation.
///
/// All criteria are conjunctive. `departments` is the role-based access
/// allowlist; `None` means unrestricted.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    pub departments: Option<HashSet<DepartmentId>>,
    pub customer: Option<CustomerId>,
    pub feature: Option<FeatureId>,
    pub status: Option<RagStatus>,
    pub period: Option<ReportingPeriod>,
}

impl ScopeFilter {
    /// A filter that keeps everything.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Restricts to a department access list.
    pub fn with_departments(mut self, departments: impl IntoIterator<Item = DepartmentId>) -> Self {
        self.departments = Some(departments.into_iter().collect());
        self
    }

    /// Restricts to indicators linked to a customer's assigned features.
    pub fn for_customer(mut self, customer: CustomerId) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Restricts to indicators linked to one feature.
    pub fn for_feature(mut self, feature: FeatureId) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Restricts to leaves classified with one status.
    pub fn with_status(mut self, status: RagStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to indicators scored within a period.
    pub fn in_period(mut self, period: ReportingPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns true when no criterion is set.
    pub fn is_unrestricted(&self) -> bool {
        self.departments.is_none()
            && self.customer.is_none()
            && self.feature.is_none()
            && self.status.is_none()
            && self.period.is_none()
    }

    /// Produces a pruned copy of the snapshot.
    ///
    /// Leaves that fail any criterion are removed; branches are kept
    /// only while at least one leaf survives. Rolling up the result
    /// recomputes every ancestor aggregate from the pruned children.
    pub fn apply(
        &self,
        snapshot: &HierarchySnapshot,
        context: &ScopeContext<'_>,
        thresholds: &RagThresholds,
    ) -> HierarchySnapshot {
        if self.is_unrestricted() {
            return snapshot.clone();
        }

        let allowed = self.allowed_indicators(context);

        let org_objectives = snapshot
            .org_objectives
            .iter()
            .filter_map(|org| {
                let departments: Vec<_> = org
                    .departments
                    .iter()
                    .filter(|dep| match &self.departments {
                        Some(allowlist) => allowlist.contains(&dep.id),
                        None => true,
                    })
                    .filter_map(|dep| {
                        let functional_objectives: Vec<_> = dep
                            .functional_objectives
                            .iter()
                            .filter_map(|fo| {
                                let key_results: Vec<_> = fo
                                    .key_results
                                    .iter()
                                    .filter_map(|kr| {
                                        let indicators: Vec<Indicator> = kr
                                            .indicators
                                            .iter()
                                            .filter(|ind| {
                                                self.keeps_indicator(ind, &allowed, thresholds)
                                            })
                                            .cloned()
                                            .collect();
                                        if indicators.is_empty() {
                                            None
                                        } else {
                                            let mut kr = kr.clone();
                                            kr.indicators = indicators;
                                            Some(kr)
                                        }
                                    })
                                    .collect();
                                if key_results.is_empty() {
                                    None
                                } else {
                                    let mut fo = fo.clone();
                                    fo.key_results = key_results;
                                    Some(fo)
                                }
                            })
                            .collect();
                        if functional_objectives.is_empty() {
                            None
                        } else {
                            let mut dep = dep.clone();
                            dep.functional_objectives = functional_objectives;
                            Some(dep)
                        }
                    })
                    .collect::<Vec<_>>();
                if departments.is_empty() {
                    None
                } else {
                    let mut org = org.clone();
                    org.departments = departments;
                    Some(org)
                }
            })
            .collect();

        HierarchySnapshot::new(org_objectives)
    }

    fn keeps_indicator(
        &self,
        indicator: &Indicator,
        allowed: &Option<HashSet<IndicatorId>>,
        thresholds: &RagThresholds,
    ) -> bool {
        if let Some(allowed) = allowed {
            if !allowed.contains(&indicator.id) {
                return false;
            }
        }
        if let Some(status) = self.status {
            let classified = progress_to_rag(
                indicator.measured_progress().map(|p| p.value()),
                thresholds,
            );
            if classified != status {
                return false;
            }
        }
        true
    }

    /// Resolves customer, feature, and period criteria to the set of
    /// indicator ids they admit. `None` means no identity restriction.
    fn allowed_indicators(&self, context: &ScopeContext<'_>) -> Option<HashSet<IndicatorId>> {
        let mut allowed: Option<HashSet<IndicatorId>> = None;

        if let Some(customer) = self.customer {
            let features: HashSet<FeatureId> = context
                .assignments
                .iter()
                .filter(|a| a.customer_id == customer)
                .map(|a| a.feature_id)
                .collect();
            let ids = context
                .links
                .iter()
                .filter(|link| features.contains(&link.feature_id))
                .map(|link| link.indicator_id)
                .collect();
            allowed = Some(intersect(allowed, ids));
        }

        if let Some(feature) = self.feature {
            let ids = context
                .links
                .iter()
                .filter(|link| link.feature_id == feature)
                .map(|link| link.indicator_id)
                .collect();
            allowed = Some(intersect(allowed, ids));
        }

        if let Some(period) = self.period {
            let ids = context
                .scores
                .iter()
                .filter(|score| period.contains(score.recorded_on))
                .map(|score| score.indicator_id)
                .collect();
            allowed = Some(intersect(allowed, ids));
        }

        allowed
    }
}

fn intersect(
    current: Option<HashSet<IndicatorId>>,
    incoming: HashSet<IndicatorId>,
) -> HashSet<IndicatorId> {
    match current {
        Some(current) => current.intersection(&incoming).copied().collect(),
        None => incoming,
    }
}
