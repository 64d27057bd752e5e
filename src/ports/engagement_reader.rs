use async_trait::async_trait;

use crate::domain::foundation::ReportingPeriod;
use crate::domain::hierarchy::{FeatureAssignment, IndicatorFeatureLink, ScoreRecord};

/// Read-only port for customer/feature links and periodic scores.
#[async_trait]
pub trait EngagementReader: Send + Sync {
    /// Fetches all customer-feature assignments.
    async fn feature_assignments(&self) -> Result<Vec<FeatureAssignment>, EngagementReadError>;

    /// Fetches all indicator-feature links.
    async fn indicator_feature_links(
        &self,
    ) -> Result<Vec<IndicatorFeatureLink>, EngagementReadError>;

    /// Fetches the scores recorded within a period.
    async fn scores_in_period(
        &self,
        period: &ReportingPeriod,
    ) -> Result<Vec<ScoreRecord>, EngagementReadError>;
}

/// Errors that can occur while reading engagement data.
#[derive(Debug, thiserror::Error)]
pub enum EngagementReadError {
    #[error("Backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockEngagementReader;

    #[async_trait]
    impl EngagementReader for MockEngagementReader {
        async fn feature_assignments(
            &self,
        ) -> Result<Vec<FeatureAssignment>, EngagementReadError> {
            Ok(Vec::new())
        }

        async fn indicator_feature_links(
            &self,
        ) -> Result<Vec<IndicatorFeatureLink>, EngagementReadError> {
            Ok(Vec::new())
        }

        async fn scores_in_period(
            &self,
            _period: &ReportingPeriod,
        ) -> Result<Vec<ScoreRecord>, EngagementReadError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn reader_trait_is_object_safe() {
        let _reader: Box<dyn EngagementReader> = Box::new(MockEngagementReader);
    }
}
