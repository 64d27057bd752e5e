//! Engagement records linking indicators to customers and features.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CustomerId, FeatureId, IndicatorId};

/// Assignment of a product feature to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureAssignment {
    pub customer_id: CustomerId,
    pub feature_id: FeatureId,
}

impl FeatureAssignment {
    pub fn new(customer_id: CustomerId, feature_id: FeatureId) -> Self {
        Self {
            customer_id,
            feature_id,
        }
    }
}

/// Link between an indicator and the feature it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorFeatureLink {
    pub indicator_id: IndicatorId,
    pub feature_id: FeatureId,
}

impl IndicatorFeatureLink {
    pub fn new(indicator_id: IndicatorId, feature_id: FeatureId) -> Self {
        Self {
            indicator_id,
            feature_id,
        }
    }
}

/// A periodic score entered for an indicator by a CSM or department head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub indicator_id: IndicatorId,
    pub recorded_on: NaiveDate,
    pub value: f64,
}

impl ScoreRecord {
    pub fn new(indicator_id: IndicatorId, recorded_on: NaiveDate, value: f64) -> Self {
        Self {
            indicator_id,
            recorded_on,
            value,
        }
    }
}
