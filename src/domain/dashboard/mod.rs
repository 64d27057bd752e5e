//! Dashboard module - Tallies, compliance, and read models.
//!
//! Everything here is derived, per-request data shaped for the
//! presentation layer: status counts per scope, customer score
//! compliance, and the camelCase overview documents the frontend
//! renders.

mod breakdown;
mod compliance;
mod overview;

pub use breakdown::{leaf_status_breakdown, StatusBreakdown};
pub use compliance::{assess_customer, ComplianceStatus, CustomerCompliance};
pub use overview::{
    DepartmentView, FunctionalObjectiveView, HealthOverview, IndicatorView, KeyResultView,
    OrgObjectiveView,
};
