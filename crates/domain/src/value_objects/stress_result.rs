use crate::value_objects::health_factor::HealthFactor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metrics of a position under one shock scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    pub label: String,
    pub health_factor: HealthFactor,
    pub net_roe: Decimal,
}
