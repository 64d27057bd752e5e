//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Goalboard domain.

mod errors;
mod ids;
mod period;
mod progress;
mod rag_status;
mod thresholds;

pub use errors::ValidationError;
pub use ids::{
    CustomerId, DepartmentId, FeatureId, FunctionalObjectiveId, IndicatorId, KeyResultId,
    OrgObjectiveId,
};
pub use period::ReportingPeriod;
pub use progress::Progress;
pub use rag_status::RagStatus;
pub use thresholds::{RagThresholds, DEFAULT_AMBER_MIN, DEFAULT_GREEN_MIN};
