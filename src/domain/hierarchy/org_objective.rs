//! Org objective record.

use serde::{Deserialize, Serialize};

use super::Department;
use crate::domain::foundation::OrgObjectiveId;

/// A top-level organizational objective owning a set of departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgObjective {
    pub id: OrgObjectiveId,
    pub name: String,
    /// Accent color used by the dashboard.
    pub color: String,
    /// Free-form grouping label, e.g. "Strategic" or "Operational".
    pub classification: Option<String>,
    pub departments: Vec<Department>,
}

impl OrgObjective {
    /// Creates an org objective.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        departments: Vec<Department>,
    ) -> Self {
        Self {
            id: OrgObjectiveId::new(),
            name: name.into(),
            color: color.into(),
            classification: None,
            departments,
        }
    }

    /// Sets the classification label.
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }
}
