//! Functional objective record.

use serde::{Deserialize, Serialize};

use super::KeyResult;
use crate::domain::foundation::FunctionalObjectiveId;

/// A functional objective owning a set of key results.
///
/// Its formula aggregates *key-result* progress values; each key result
/// has already been rolled up from its own indicators with its own
/// formula. The two levels are independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalObjective {
    pub id: FunctionalObjectiveId,
    pub name: String,
    /// Raw aggregation formula as entered by an admin, if any.
    pub formula: Option<String>,
    pub key_results: Vec<KeyResult>,
}

impl FunctionalObjective {
    /// Creates a functional objective with the default aggregation.
    pub fn new(name: impl Into<String>, key_results: Vec<KeyResult>) -> Self {
        Self {
            id: FunctionalObjectiveId::new(),
            name: name.into(),
            formula: None,
            key_results,
        }
    }

    /// Sets the stored formula string.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }
}
