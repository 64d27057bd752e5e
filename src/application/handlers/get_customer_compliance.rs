//! GetCustomerComplianceHandler - Query handler for score compliance.

use std::sync::Arc;

use crate::domain::dashboard::{assess_customer, CustomerCompliance};
use crate::domain::foundation::{CustomerId, ReportingPeriod};
use crate::ports::EngagementReader;

use super::HealthQueryError;

/// Query for one customer's score compliance in one period.
#[derive(Debug, Clone)]
pub struct GetCustomerComplianceQuery {
    pub customer_id: CustomerId,
    pub period: ReportingPeriod,
}

/// Handler computing expected-versus-filled score compliance.
pub struct GetCustomerComplianceHandler {
    engagement: Arc<dyn EngagementReader>,
}

impl GetCustomerComplianceHandler {
    pub fn new(engagement: Arc<dyn EngagementReader>) -> Self {
        Self { engagement }
    }

    pub async fn handle(
        &self,
        query: GetCustomerComplianceQuery,
    ) -> Result<CustomerCompliance, HealthQueryError> {
        let assignments = self.engagement.feature_assignments().await?;
        let links = self.engagement.indicator_feature_links().await?;
        let scores = self.engagement.scores_in_period(&query.period).await?;

        Ok(assess_customer(
            query.customer_id,
            &assignments,
            &links,
            &scores,
            &query.period,
        ))
    }
}
