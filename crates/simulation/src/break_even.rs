//! Break-even solver.
//!
//! Inverts the net ROE formula for the borrow APY, holding every other
//! parameter of the loop fixed.

use crate::engine::LoopParameters;
use looplab_domain::entities::{MarketSnapshot, StrategyInput};
use looplab_domain::error::DomainError;
use looplab_domain::math::leverage;
use rust_decimal::Decimal;

/// Borrow APY at which the strategy's net ROE is zero.
///
/// formula: (supply_apy * multiplier + incentives_net - fees) / (multiplier - 1)
///
/// Returns `Ok(None)` for an unleveraged strategy, where no borrow rate is
/// meaningful.
///
/// # Errors
/// Propagates validation errors of the strategy or the snapshot, and
/// returns [`DomainError::LeverageOverflow`] if the rate is out of range.
pub fn break_even_borrow_rate(
    input: &StrategyInput,
    snapshot: &MarketSnapshot,
) -> Result<Option<Decimal>, DomainError> {
    let params = LoopParameters::derive(input, snapshot)?;
    if params.multiplier == Decimal::ONE {
        return Ok(None);
    }
    leverage::break_even_borrow_rate(
        snapshot.supply_apy,
        params.multiplier,
        params.incentives_net,
        params.fees,
    )
    .map(Some)
    .ok_or(DomainError::LeverageOverflow(params.ltv_used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulate_strategy;
    use looplab_domain::entities::{AdvancedOverrides, Market};
    use looplab_domain::enums::{Network, ProviderName, RiskTarget};
    use rust_decimal_macros::dec;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            market_id: "op-morpho-weth".to_string(),
            supply_apy: dec!(0.061),
            borrow_apy: dec!(0.083),
            incentives_supply: dec!(0.02),
            incentives_borrow: dec!(0.012),
            ltv: dec!(0.7),
            liquidation_threshold: dec!(0.76),
            liquidation_bonus: dec!(0.055),
            available_liquidity: dec!(95000000),
            utilization: dec!(0.69),
            oracle_type: "TWAP + Chainlink".to_string(),
            notes: vec![],
            risk_flags: vec![],
        }
    }

    fn input(risk_target: RiskTarget) -> StrategyInput {
        let market = Market::new("op-morpho-weth", "OP / WETH Boost", Network::Optimism, ProviderName::Morpho);
        StrategyInput::new("Loop", &market, "ETH", "USDC", dec!(5000), risk_target)
    }

    #[test]
    fn test_break_even_zeroes_net_roe() {
        for target in RiskTarget::ALL {
            let strategy = input(target);
            let rate = break_even_borrow_rate(&strategy, &snapshot()).unwrap().unwrap();

            let mut at_break_even = snapshot();
            at_break_even.borrow_apy = rate;
            let result = simulate_strategy(&strategy, &at_break_even).unwrap();
            assert!(result.net_roe.abs() < dec!(0.000000001), "{}", result.net_roe);
        }
    }

    #[test]
    fn test_break_even_for_half_ltv() {
        // m = 2: (0.061 * 2 + 0.032 - 0.003) / 1
        let strategy = input(RiskTarget::Drawdown15).with_overrides(AdvancedOverrides {
            manual_ltv: Some(dec!(0.5)),
            ..Default::default()
        });
        let rate = break_even_borrow_rate(&strategy, &snapshot()).unwrap();
        assert_eq!(rate, Some(dec!(0.151)));
    }

    #[test]
    fn test_break_even_undefined_without_debt() {
        let strategy = input(RiskTarget::Drawdown15).with_overrides(AdvancedOverrides {
            manual_ltv: Some(Decimal::ZERO),
            ..Default::default()
        });
        assert_eq!(break_even_borrow_rate(&strategy, &snapshot()).unwrap(), None);
    }

    #[test]
    fn test_break_even_near_full_ltv() {
        let near_one = |ltv: Decimal| {
            input(RiskTarget::Drawdown15).with_overrides(AdvancedOverrides {
                manual_ltv: Some(ltv),
                ..Default::default()
            })
        };

        // m = 1e25: the rate converges to the supply APY.
        let rate = break_even_borrow_rate(&near_one(dec!(0.9999999999999999999999999)), &snapshot())
            .unwrap()
            .unwrap();
        assert!((rate - dec!(0.061)).abs() < dec!(0.000000001));

        // m = 1e28 with a 1000% supply APY no longer fits.
        let ltv = dec!(0.9999999999999999999999999999);
        let mut extreme = snapshot();
        extreme.supply_apy = dec!(10);
        assert_eq!(
            break_even_borrow_rate(&near_one(ltv), &extreme),
            Err(DomainError::LeverageOverflow(ltv))
        );
    }
}
