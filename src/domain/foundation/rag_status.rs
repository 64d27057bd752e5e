//! RAG (red/amber/green) health status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light health status for an entity in the hierarchy.
///
/// `NotSet` is a first-class value meaning "insufficient data to
/// classify", distinct from a numeric 0% progress. Statuses are always
/// recomputed from values and thresholds, never stored as ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RagStatus {
    Green,
    Amber,
    Red,
    #[default]
    NotSet,
}

impl RagStatus {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RagStatus::Green => "Green",
            RagStatus::Amber => "Amber",
            RagStatus::Red => "Red",
            RagStatus::NotSet => "Not Set",
        }
    }

    /// Returns true if this status was derived from measured data.
    pub fn is_scored(&self) -> bool {
        !matches!(self, RagStatus::NotSet)
    }
}

impl fmt::Display for RagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RagStatus::Green => "green",
            RagStatus::Amber => "amber",
            RagStatus::Red => "red",
            RagStatus::NotSet => "not-set",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_variants() {
        assert_eq!(RagStatus::Green.label(), "Green");
        assert_eq!(RagStatus::Amber.label(), "Amber");
        assert_eq!(RagStatus::Red.label(), "Red");
        assert_eq!(RagStatus::NotSet.label(), "Not Set");
    }

    #[test]
    fn not_set_is_not_scored() {
        assert!(RagStatus::Green.is_scored());
        assert!(RagStatus::Amber.is_scored());
        assert!(RagStatus::Red.is_scored());
        assert!(!RagStatus::NotSet.is_scored());
    }

    #[test]
    fn default_is_not_set() {
        assert_eq!(RagStatus::default(), RagStatus::NotSet);
    }

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&RagStatus::Green).unwrap(), "\"green\"");
        assert_eq!(serde_json::to_string(&RagStatus::NotSet).unwrap(), "\"not-set\"");
    }

    #[test]
    fn status_deserializes_kebab_case() {
        let status: RagStatus = serde_json::from_str("\"not-set\"").unwrap();
        assert_eq!(status, RagStatus::NotSet);
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(format!("{}", RagStatus::Amber), "amber");
        assert_eq!(format!("{}", RagStatus::NotSet), "not-set");
    }
}
