//! In-memory directory implementing both read ports.

use async_trait::async_trait;

use crate::domain::foundation::{RagThresholds, ReportingPeriod};
use crate::domain::hierarchy::{
    FeatureAssignment, HierarchySnapshot, IndicatorFeatureLink, ScoreRecord,
};
use crate::ports::{
    EngagementReadError, EngagementReader, HierarchyReadError, HierarchyReader,
};

/// Owned, in-memory copy of everything the read ports serve.
///
/// Handy for tests and local experimentation; a real deployment backs
/// the same ports with the managed persistence service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    snapshot: HierarchySnapshot,
    thresholds: Option<RagThresholds>,
    assignments: Vec<FeatureAssignment>,
    links: Vec<IndicatorFeatureLink>,
    scores: Vec<ScoreRecord>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hierarchy snapshot to serve.
    pub fn with_snapshot(mut self, snapshot: HierarchySnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Sets an admin-edited threshold table.
    pub fn with_thresholds(mut self, thresholds: RagThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Adds customer-feature assignments.
    pub fn with_assignments(
        mut self,
        assignments: impl IntoIterator<Item = FeatureAssignment>,
    ) -> Self {
        self.assignments.extend(assignments);
        self
    }

    /// Adds indicator-feature links.
    pub fn with_links(mut self, links: impl IntoIterator<Item = IndicatorFeatureLink>) -> Self {
        self.links.extend(links);
        self
    }

    /// Adds score records.
    pub fn with_scores(mut self, scores: impl IntoIterator<Item = ScoreRecord>) -> Self {
        self.scores.extend(scores);
        self
    }
}

#[async_trait]
impl HierarchyReader for InMemoryDirectory {
    async fn load_snapshot(&self) -> Result<HierarchySnapshot, HierarchyReadError> {
        Ok(self.snapshot.clone())
    }

    async fn load_thresholds(&self) -> Result<Option<RagThresholds>, HierarchyReadError> {
        Ok(self.thresholds)
    }
}

#[async_trait]
impl EngagementReader for InMemoryDirectory {
    async fn feature_assignments(&self) -> Result<Vec<FeatureAssignment>, EngagementReadError> {
        Ok(self.assignments.clone())
    }

    async fn indicator_feature_links(
        &self,
    ) -> Result<Vec<IndicatorFeatureLink>, EngagementReadError> {
        Ok(self.links.clone())
    }

    async fn scores_in_period(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<ScoreRecord>, EngagementReadError> {
        Ok(self
            .scores
            .iter()
            .filter(|score| period.contains(score.recorded_on))
            .cloned()
            .collect())
    }
}
