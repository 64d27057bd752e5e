//! Hierarchy module - Read-only records for the objective tree.
//!
//! The hierarchy is Org Objective -> Department -> Functional Objective ->
//! Key Result -> Indicator. These records are owned and mutated by the
//! external persistence layer; the engine treats every snapshot as
//! immutable for the duration of one aggregation pass.

mod department;
mod engagement;
mod functional_objective;
mod indicator;
mod key_result;
mod org_objective;
mod snapshot;

pub use department::Department;
pub use engagement::{FeatureAssignment, IndicatorFeatureLink, ScoreRecord};
pub use functional_objective::FunctionalObjective;
pub use indicator::Indicator;
pub use key_result::KeyResult;
pub use org_objective::OrgObjective;
pub use snapshot::HierarchySnapshot;
