//! Department record.

use serde::{Deserialize, Serialize};

use super::FunctionalObjective;
use crate::domain::foundation::DepartmentId;

/// A department owning a set of functional objectives.
///
/// Departments always aggregate by plain average; custom formulas are
/// not supported at this level. That is an intentional simplification
/// of the product design, not a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Accent color used by the dashboard, e.g. "#2e7d32".
    pub color: String,
    pub functional_objectives: Vec<FunctionalObjective>,
}

impl Department {
    /// Creates a department.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        functional_objectives: Vec<FunctionalObjective>,
    ) -> Self {
        Self {
            id: DepartmentId::new(),
            name: name.into(),
            color: color.into(),
            functional_objectives,
        }
    }
}
