//! Leverage policy.
//!
//! Maps the coarse risk selector to a recommended loan-to-value ratio and
//! resolves the LTV a strategy actually loops to.

use looplab_domain::entities::StrategyInput;
use looplab_domain::enums::RiskTarget;
use rust_decimal::Decimal;

/// Recommended LTV for a risk target: 15 → 0.55, 25 → 0.65, 35 → 0.72.
#[must_use]
pub fn recommended_ltv(risk_target: RiskTarget) -> Decimal {
    match risk_target {
        RiskTarget::Drawdown15 => Decimal::new(55, 2),
        RiskTarget::Drawdown25 => Decimal::new(65, 2),
        RiskTarget::Drawdown35 => Decimal::new(72, 2),
    }
}

/// The manual LTV when one is set, the recommendation otherwise.
#[must_use]
pub fn ltv_used(input: &StrategyInput) -> Decimal {
    input
        .overrides
        .manual_ltv
        .unwrap_or_else(|| recommended_ltv(input.risk_target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use looplab_domain::entities::{AdvancedOverrides, Market};
    use looplab_domain::enums::{Network, ProviderName};
    use rust_decimal_macros::dec;

    #[test]
    fn test_recommended_ltv_table() {
        assert_eq!(recommended_ltv(RiskTarget::Drawdown15), dec!(0.55));
        assert_eq!(recommended_ltv(RiskTarget::Drawdown25), dec!(0.65));
        assert_eq!(recommended_ltv(RiskTarget::Drawdown35), dec!(0.72));
    }

    #[test]
    fn test_manual_ltv_takes_precedence() {
        let market = Market::new("m", "M", Network::Ethereum, ProviderName::AaveV3);
        let input = StrategyInput::new("s", &market, "ETH", "USDC", dec!(1000), RiskTarget::Drawdown35);
        assert_eq!(ltv_used(&input), dec!(0.72));

        let pro = input.with_overrides(AdvancedOverrides {
            manual_ltv: Some(dec!(0.4)),
            ..Default::default()
        });
        assert_eq!(ltv_used(&pro), dec!(0.4));
    }
}
