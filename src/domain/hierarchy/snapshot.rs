//! Immutable hierarchy snapshot.

use serde::{Deserialize, Serialize};

use super::{Indicator, OrgObjective};

/// One fetch of the full objective tree.
///
/// All aggregation runs against a snapshot taken once per read request;
/// nothing in the engine mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    pub org_objectives: Vec<OrgObjective>,
}

impl HierarchySnapshot {
    pub fn new(org_objectives: Vec<OrgObjective>) -> Self {
        Self { org_objectives }
    }

    /// Iterates every indicator leaf in the tree.
    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.org_objectives
            .iter()
            .flat_map(|org| &org.departments)
            .flat_map(|dep| &dep.functional_objectives)
            .flat_map(|fo| &fo.key_results)
            .flat_map(|kr| &kr.indicators)
    }

    /// Returns true when the tree holds no indicators at all.
    pub fn is_empty(&self) -> bool {
        self.indicators().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hierarchy::{Department, FunctionalObjective, KeyResult};

    #[test]
    fn indicators_walks_all_leaves() {
        let snapshot = HierarchySnapshot::new(vec![OrgObjective::new(
            "Delight customers",
            "#1a73e8",
            vec![Department::new(
                "Support",
                "#fbbc04",
                vec![FunctionalObjective::new(
                    "Faster responses",
                    vec![
                        KeyResult::new(
                            "Cut first-response time",
                            vec![
                                Indicator::new("Median FRT", 3.0, 4.0),
                                Indicator::unmeasured("P95 FRT"),
                            ],
                        ),
                        KeyResult::new("Raise CSAT", vec![Indicator::new("CSAT", 88.0, 90.0)]),
                    ],
                )],
            )],
        )]);

        assert_eq!(snapshot.indicators().count(), 3);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn empty_snapshot_has_no_indicators() {
        assert!(HierarchySnapshot::default().is_empty());
    }
}
