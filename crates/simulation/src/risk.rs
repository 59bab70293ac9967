//! Risk alerts derived from a simulation result.

use looplab_domain::value_objects::StrategyResult;
use rust_decimal::Decimal;
use serde::Serialize;

/// Health factor below which the position is flagged.
pub const HEALTH_FACTOR_BUFFER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Distance to liquidation below which the position is flagged.
pub const MIN_LIQUIDATION_DISTANCE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
/// Net ROE below which the yield is considered too thin for the risk.
pub const MIN_ORGANIC_ROE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCheck {
    HealthFactorBuffer,
    LiquidationDistance,
    OrganicRoe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAlert {
    pub check: RiskCheck,
    /// `true` when the check failed.
    pub triggered: bool,
    pub message: &'static str,
}

impl RiskAlert {
    fn new(check: RiskCheck, triggered: bool, warning: &'static str, ok: &'static str) -> Self {
        Self {
            check,
            triggered,
            message: if triggered { warning } else { ok },
        }
    }
}

/// Runs the three risk checks, in a fixed order.
#[must_use]
pub fn risk_alerts(result: &StrategyResult) -> Vec<RiskAlert> {
    vec![
        RiskAlert::new(
            RiskCheck::HealthFactorBuffer,
            result.health_factor.is_below(HEALTH_FACTOR_BUFFER),
            "Health factor below the recommended buffer.",
            "Health factor within the recommended buffer.",
        ),
        RiskAlert::new(
            RiskCheck::LiquidationDistance,
            result.distance_to_liq < MIN_LIQUIDATION_DISTANCE,
            "Little room before liquidation.",
            "Comfortable distance to liquidation.",
        ),
        RiskAlert::new(
            RiskCheck::OrganicRoe,
            result.net_roe < MIN_ORGANIC_ROE,
            "Organic ROE is low for the risk taken.",
            "Organic ROE is healthy for the risk taken.",
        ),
    ]
}
