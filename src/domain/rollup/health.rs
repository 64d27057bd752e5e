//! Bottom-up rollup of the hierarchy into an ephemeral health tree.

use crate::domain::foundation::{
    DepartmentId, FunctionalObjectiveId, IndicatorId, KeyResultId, OrgObjectiveId, Progress,
    RagStatus, RagThresholds,
};
use crate::domain::formula::{parse_formula_type, FormulaKind};
use crate::domain::hierarchy::{
    Department, FunctionalObjective, HierarchySnapshot, Indicator, KeyResult, OrgObjective,
};
use crate::domain::rag::{classify_indicator_mix, progress_to_rag};

use super::aggregate_named;

/// Health of a single indicator leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorHealth {
    pub id: IndicatorId,
    pub name: String,
    pub progress: Option<Progress>,
    pub status: RagStatus,
}

/// Health of a key result, rolled up from its indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResultHealth {
    pub id: KeyResultId,
    pub name: String,
    pub progress: Option<Progress>,
    /// Percentage-threshold classification of the blended progress.
    pub status: RagStatus,
    /// Indicator-proportion classification. Views pick one of the two
    /// modes; they can legitimately disagree.
    pub indicator_mix_status: RagStatus,
    pub indicators: Vec<IndicatorHealth>,
}

/// Health of a functional objective, rolled up from its key results.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalObjectiveHealth {
    pub id: FunctionalObjectiveId,
    pub name: String,
    pub progress: Option<Progress>,
    pub status: RagStatus,
    pub key_results: Vec<KeyResultHealth>,
}

/// Health of a department, rolled up from its functional objectives.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentHealth {
    pub id: DepartmentId,
    pub name: String,
    pub color: String,
    pub progress: Option<Progress>,
    pub status: RagStatus,
    pub functional_objectives: Vec<FunctionalObjectiveHealth>,
}

/// Health of an org objective, rolled up from its departments.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgObjectiveHealth {
    pub id: OrgObjectiveId,
    pub name: String,
    pub color: String,
    pub classification: Option<String>,
    pub progress: Option<Progress>,
    pub status: RagStatus,
    pub departments: Vec<DepartmentHealth>,
}

/// Derives the health of one indicator.
pub fn rollup_indicator(indicator: &Indicator, thresholds: &RagThresholds) -> IndicatorHealth {
    let progress = indicator.measured_progress();
    IndicatorHealth {
        id: indicator.id,
        name: indicator.name.clone(),
        status: progress_to_rag(progress.map(|p| p.value()), thresholds),
        progress,
    }
}

/// Rolls a key result up from its measured indicators.
///
/// Unmeasured indicators are excluded from the blend entirely; with no
/// measured indicator at all the key result is `NotSet`.
pub fn rollup_key_result(key_result: &KeyResult, thresholds: &RagThresholds) -> KeyResultHealth {
    let indicators: Vec<IndicatorHealth> = key_result
        .indicators
        .iter()
        .map(|indicator| rollup_indicator(indicator, thresholds))
        .collect();

    let children: Vec<(&str, f64)> = key_result
        .indicators
        .iter()
        .filter_map(|indicator| {
            indicator
                .measured_progress()
                .map(|p| (indicator.name.as_str(), p.value()))
        })
        .collect();
    let child_weights: Vec<Option<f64>> = key_result
        .indicators
        .iter()
        .filter(|indicator| indicator.is_measured())
        .map(|indicator| indicator.weight)
        .collect();

    let formula = resolve_entity_weights(
        parse_formula_type(key_result.formula.as_deref()),
        &child_weights,
    );
    let progress = aggregate_named(&children, &formula).map(Progress::new);
    let statuses: Vec<RagStatus> = indicators.iter().map(|i| i.status).collect();

    KeyResultHealth {
        id: key_result.id,
        name: key_result.name.clone(),
        status: progress_to_rag(progress.map(|p| p.value()), thresholds),
        indicator_mix_status: classify_indicator_mix(&statuses),
        progress,
        indicators,
    }
}

/// Rolls a functional objective up from its key results.
///
/// Each key result's progress is already its own aggregate; the
/// objective's formula blends those aggregates and never reaches down
/// to raw indicators.
pub fn rollup_functional_objective(
    objective: &FunctionalObjective,
    thresholds: &RagThresholds,
) -> FunctionalObjectiveHealth {
    let key_results: Vec<KeyResultHealth> = objective
        .key_results
        .iter()
        .map(|kr| rollup_key_result(kr, thresholds))
        .collect();

    let children: Vec<(&str, f64)> = key_results
        .iter()
        .filter_map(|kr| kr.progress.map(|p| (kr.name.as_str(), p.value())))
        .collect();
    let child_weights: Vec<Option<f64>> = objective
        .key_results
        .iter()
        .zip(&key_results)
        .filter(|(_, health)| health.progress.is_some())
        .map(|(kr, _)| kr.weight)
        .collect();

    let formula = resolve_entity_weights(
        parse_formula_type(objective.formula.as_deref()),
        &child_weights,
    );
    let progress = aggregate_named(&children, &formula).map(Progress::new);

    FunctionalObjectiveHealth {
        id: objective.id,
        name: objective.name.clone(),
        status: progress_to_rag(progress.map(|p| p.value()), thresholds),
        progress,
        key_results,
    }
}

/// Rolls a department up from its functional objectives.
///
/// Departments always use the plain average; there is no formula field
/// at this level.
pub fn rollup_department(department: &Department, thresholds: &RagThresholds) -> DepartmentHealth {
    let functional_objectives: Vec<FunctionalObjectiveHealth> = department
        .functional_objectives
        .iter()
        .map(|fo| rollup_functional_objective(fo, thresholds))
        .collect();

    let progress = plain_average_of(
        functional_objectives
            .iter()
            .filter_map(|fo| fo.progress.map(|p| p.value())),
    );

    DepartmentHealth {
        id: department.id,
        name: department.name.clone(),
        color: department.color.clone(),
        status: progress_to_rag(progress.map(|p| p.value()), thresholds),
        progress,
        functional_objectives,
    }
}

/// Rolls an org objective up from its departments, one level above.
pub fn rollup_org_objective(
    objective: &OrgObjective,
    thresholds: &RagThresholds,
) -> OrgObjectiveHealth {
    let departments: Vec<DepartmentHealth> = objective
        .departments
        .iter()
        .map(|dep| rollup_department(dep, thresholds))
        .collect();

    let progress = plain_average_of(
        departments
            .iter()
            .filter_map(|dep| dep.progress.map(|p| p.value())),
    );

    OrgObjectiveHealth {
        id: objective.id,
        name: objective.name.clone(),
        color: objective.color.clone(),
        classification: objective.classification.clone(),
        status: progress_to_rag(progress.map(|p| p.value()), thresholds),
        progress,
        departments,
    }
}

/// Rolls up every org objective in a snapshot.
pub fn rollup_snapshot(
    snapshot: &HierarchySnapshot,
    thresholds: &RagThresholds,
) -> Vec<OrgObjectiveHealth> {
    snapshot
        .org_objectives
        .iter()
        .map(|org| rollup_org_objective(org, thresholds))
        .collect()
}

/// Fills an empty `WEIGHTED` list from per-child entity weights.
///
/// When the stored formula is `WEIGHTED` with no inline list, the
/// weights assigned to the children themselves apply - but only if
/// every measured child carries one. Otherwise the list stays empty
/// and the aggregator falls back to the average.
fn resolve_entity_weights(kind: FormulaKind, child_weights: &[Option<f64>]) -> FormulaKind {
    match kind {
        FormulaKind::Weighted { weights } if weights.is_empty() => {
            let resolved: Option<Vec<f64>> = child_weights.iter().copied().collect();
            FormulaKind::Weighted {
                weights: resolved.unwrap_or_default(),
            }
        }
        other => other,
    }
}

fn plain_average_of(values: impl Iterator<Item = f64>) -> Option<Progress> {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return None;
    }
    Some(Progress::new(
        values.iter().sum::<f64>() / values.len() as f64,
    ))
}
