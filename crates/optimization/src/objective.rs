use looplab_domain::value_objects::StrategyResult;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Floor applied to the liquidation distance when computing risk-adjusted return.
pub const MIN_RISK_DISTANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

pub trait ObjectiveFunction {
    fn evaluate(&self, result: &StrategyResult) -> Decimal;
    fn compare(&self, a: &StrategyResult, b: &StrategyResult) -> Ordering {
        self.evaluate(a).cmp(&self.evaluate(b))
    }
}

pub struct MaximizeNetRoe;
impl ObjectiveFunction for MaximizeNetRoe {
    fn evaluate(&self, result: &StrategyResult) -> Decimal {
        result.net_roe
    }
}

/// Prefers the largest price drop tolerated before liquidation.
pub struct MaximizeSafety;
impl ObjectiveFunction for MaximizeSafety {
    fn evaluate(&self, result: &StrategyResult) -> Decimal {
        result.distance_to_liq
    }
}

/// Net ROE per unit of liquidation distance (RAR).
pub struct MaximizeRiskAdjusted;
impl ObjectiveFunction for MaximizeRiskAdjusted {
    fn evaluate(&self, result: &StrategyResult) -> Decimal {
        risk_adjusted_return(result)
    }
}

/// `net_roe / max(distance_to_liq, 0.01)`, saturating at the decimal bounds.
pub fn risk_adjusted_return(result: &StrategyResult) -> Decimal {
    let distance = result.distance_to_liq.max(MIN_RISK_DISTANCE);
    result.net_roe.checked_div(distance).unwrap_or(if result.net_roe.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}
