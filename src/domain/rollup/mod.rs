//! Rollup module - Bottom-up progress aggregation.
//!
//! Indicator measurements are the leaves; each level above blends its
//! children with its own formula: Key Result <- indicators, Functional
//! Objective <- key results, Department <- functional objectives (plain
//! average, always), Org Objective <- departments (plain average).
//!
//! Aggregation is a pure read path: one immutable snapshot in, one
//! ephemeral health tree out, identical output for identical input.

mod aggregator;
mod health;

pub use aggregator::{aggregate_named, aggregate_progress};
pub use health::{
    rollup_department, rollup_functional_objective, rollup_indicator, rollup_key_result,
    rollup_org_objective, rollup_snapshot, DepartmentHealth, FunctionalObjectiveHealth,
    IndicatorHealth, KeyResultHealth, OrgObjectiveHealth,
};
