//! GetHealthOverviewHandler - Query handler for the roll-up dashboard.
//!
//! Fetches one immutable snapshot, applies the caller's scope filter,
//! rolls the pruned tree up bottom-up, and returns the camelCase
//! overview document.

use std::sync::Arc;

use tracing::debug;

use crate::domain::dashboard::HealthOverview;
use crate::domain::rollup::rollup_snapshot;
use crate::domain::scope::{ScopeContext, ScopeFilter};
use crate::ports::{EngagementReadError, EngagementReader, HierarchyReadError, HierarchyReader};

/// Query to get the health overview under an optional scope.
#[derive(Debug, Clone, Default)]
pub struct GetHealthOverviewQuery {
    /// Scope to apply before aggregation; unrestricted by default.
    pub filter: ScopeFilter,
}

/// Errors surfaced by the health query handlers.
#[derive(Debug, thiserror::Error)]
pub enum HealthQueryError {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyReadError),

    #[error(transparent)]
    Engagement(#[from] EngagementReadError),
}

/// Handler for retrieving the health overview.
pub struct GetHealthOverviewHandler {
    hierarchy: Arc<dyn HierarchyReader>,
    engagement: Arc<dyn EngagementReader>,
}

impl GetHealthOverviewHandler {
    pub fn new(hierarchy: Arc<dyn HierarchyReader>, engagement: Arc<dyn EngagementReader>) -> Self {
        Self {
            hierarchy,
            engagement,
        }
    }

    pub async fn handle(
        &self,
        query: GetHealthOverviewQuery,
    ) -> Result<HealthOverview, HealthQueryError> {
        let snapshot = self.hierarchy.load_snapshot().await?;
        let thresholds = self
            .hierarchy
            .load_thresholds()
            .await?
            .unwrap_or_default();

        // Engagement data is only needed when the filter reaches for it.
        let needs_engagement = query.filter.customer.is_some()
            || query.filter.feature.is_some()
            || query.filter.period.is_some();

        let filtered = if needs_engagement {
            let assignments = self.engagement.feature_assignments().await?;
            let links = self.engagement.indicator_feature_links().await?;
            let scores = match query.filter.period {
                Some(period) => self.engagement.scores_in_period(&period).await?,
                None => Vec::new(),
            };
            let context = ScopeContext {
                assignments: &assignments,
                links: &links,
                scores: &scores,
            };
            query.filter.apply(&snapshot, &context, &thresholds)
        } else {
            query
                .filter
                .apply(&snapshot, &ScopeContext::empty(), &thresholds)
        };

        debug!(
            indicators = filtered.indicators().count(),
            filtered = !query.filter.is_unrestricted(),
            "rolling up health overview"
        );

        let health = rollup_snapshot(&filtered, &thresholds);
        Ok(HealthOverview::from_health(health, thresholds))
    }
}
