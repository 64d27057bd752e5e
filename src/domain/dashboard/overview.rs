//! Health-overview read models for the presentation layer.

use serde::Serialize;

use crate::domain::foundation::{
    DepartmentId, FunctionalObjectiveId, IndicatorId, KeyResultId, OrgObjectiveId, RagStatus,
    RagThresholds,
};
use crate::domain::rollup::{
    DepartmentHealth, FunctionalObjectiveHealth, IndicatorHealth, KeyResultHealth,
    OrgObjectiveHealth,
};

use super::{leaf_status_breakdown, StatusBreakdown};

/// The main health overview - the aggregated tree plus summary tallies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthOverview {
    pub org_objectives: Vec<OrgObjectiveView>,
    /// Leaf indicator tally across the visible scope.
    pub summary: StatusBreakdown,
    /// Share of visible indicators that have been scored.
    pub completion_pct: Option<f64>,
    /// The threshold table the statuses were classified with.
    pub thresholds: RagThresholds,
}

impl HealthOverview {
    /// Builds the overview from a rolled-up health tree.
    pub fn from_health(org_objectives: Vec<OrgObjectiveHealth>, thresholds: RagThresholds) -> Self {
        let summary = leaf_status_breakdown(&org_objectives);
        Self {
            org_objectives: org_objectives.iter().map(OrgObjectiveView::from).collect(),
            summary,
            completion_pct: summary.completion_pct(),
            thresholds,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgObjectiveView {
    pub id: OrgObjectiveId,
    pub name: String,
    pub color: String,
    pub classification: Option<String>,
    pub progress: Option<f64>,
    /// Progress clamped to 0-100 for bar rendering.
    pub display_progress: Option<f64>,
    pub status: RagStatus,
    pub departments: Vec<DepartmentView>,
}

impl From<&OrgObjectiveHealth> for OrgObjectiveView {
    fn from(health: &OrgObjectiveHealth) -> Self {
        Self {
            id: health.id,
            name: health.name.clone(),
            color: health.color.clone(),
            classification: health.classification.clone(),
            progress: health.progress.map(|p| p.value()),
            display_progress: health.progress.map(|p| p.display_value()),
            status: health.status,
            departments: health.departments.iter().map(DepartmentView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentView {
    pub id: DepartmentId,
    pub name: String,
    pub color: String,
    pub progress: Option<f64>,
    pub display_progress: Option<f64>,
    pub status: RagStatus,
    pub functional_objectives: Vec<FunctionalObjectiveView>,
}

impl From<&DepartmentHealth> for DepartmentView {
    fn from(health: &DepartmentHealth) -> Self {
        Self {
            id: health.id,
            name: health.name.clone(),
            color: health.color.clone(),
            progress: health.progress.map(|p| p.value()),
            display_progress: health.progress.map(|p| p.display_value()),
            status: health.status,
            functional_objectives: health
                .functional_objectives
                .iter()
                .map(FunctionalObjectiveView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalObjectiveView {
    pub id: FunctionalObjectiveId,
    pub name: String,
    pub progress: Option<f64>,
    pub display_progress: Option<f64>,
    pub status: RagStatus,
    pub key_results: Vec<KeyResultView>,
}

impl From<&FunctionalObjectiveHealth> for FunctionalObjectiveView {
    fn from(health: &FunctionalObjectiveHealth) -> Self {
        Self {
            id: health.id,
            name: health.name.clone(),
            progress: health.progress.map(|p| p.value()),
            display_progress: health.progress.map(|p| p.display_value()),
            status: health.status,
            key_results: health.key_results.iter().map(KeyResultView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultView {
    pub id: KeyResultId,
    pub name: String,
    pub progress: Option<f64>,
    pub display_progress: Option<f64>,
    /// Percentage-threshold classification.
    pub status: RagStatus,
    /// Indicator-proportion classification; card views use this one.
    pub indicator_mix_status: RagStatus,
    pub indicators: Vec<IndicatorView>,
}

impl From<&KeyResultHealth> for KeyResultView {
    fn from(health: &KeyResultHealth) -> Self {
        Self {
            id: health.id,
            name: health.name.clone(),
            progress: health.progress.map(|p| p.value()),
            display_progress: health.progress.map(|p| p.display_value()),
            status: health.status,
            indicator_mix_status: health.indicator_mix_status,
            indicators: health.indicators.iter().map(IndicatorView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorView {
    pub id: IndicatorId,
    pub name: String,
    pub progress: Option<f64>,
    pub display_progress: Option<f64>,
    pub status: RagStatus,
}

impl From<&IndicatorHealth> for IndicatorView {
    fn from(health: &IndicatorHealth) -> Self {
        Self {
            id: health.id,
            name: health.name.clone(),
            progress: health.progress.map(|p| p.value()),
            display_progress: health.progress.map(|p| p.display_value()),
            status: health.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hierarchy::{
        Department, FunctionalObjective, Indicator, KeyResult, OrgObjective,
    };
    use crate::domain::rollup::rollup_org_objective;

    fn sample_health() -> OrgObjectiveHealth {
        let org = OrgObjective::new(
            "Delight customers",
            "#1a73e8",
            vec![Department::new(
                "Support",
                "#fbbc04",
                vec![FunctionalObjective::new(
                    "Faster responses",
                    vec![KeyResult::new(
                        "Cut response time",
                        vec![
                            Indicator::new("Median FRT", 120.0, 100.0),
                            Indicator::unmeasured("P95 FRT"),
                        ],
                    )],
                )],
            )],
        );
        rollup_org_objective(&org, &RagThresholds::default())
    }

    #[test]
    fn overview_serializes_camel_case() {
        let overview = HealthOverview::from_health(vec![sample_health()], RagThresholds::default());
        let json = serde_json::to_value(&overview).unwrap();
        assert!(json.get("orgObjectives").is_some());
        assert!(json.get("completionPct").is_some());
        let org = &json["orgObjectives"][0];
        assert!(org.get("displayProgress").is_some());
        assert!(org.get("departments").is_some());
    }

    #[test]
    fn display_progress_is_clamped_but_progress_is_not() {
        let overview = HealthOverview::from_health(vec![sample_health()], RagThresholds::default());
        let kr = &overview.org_objectives[0].departments[0].functional_objectives[0].key_results[0];
        assert_eq!(kr.progress, Some(120.0));
        assert_eq!(kr.display_progress, Some(100.0));
    }

    #[test]
    fn summary_counts_all_leaves() {
        let overview = HealthOverview::from_health(vec![sample_health()], RagThresholds::default());
        assert_eq!(overview.summary.total(), 2);
        assert_eq!(overview.summary.green, 1);
        assert_eq!(overview.summary.not_set, 1);
        assert_eq!(overview.completion_pct, Some(50.0));
    }

    #[test]
    fn key_result_view_carries_both_classification_modes() {
        let overview = HealthOverview::from_health(vec![sample_health()], RagThresholds::default());
        let kr = &overview.org_objectives[0].departments[0].functional_objectives[0].key_results[0];
        assert_eq!(kr.status, RagStatus::Green);
        assert_eq!(kr.indicator_mix_status, RagStatus::Green);
    }
}
