//! Side-by-side comparison of simulated strategies.

use crate::objective::{
    MaximizeNetRoe, MaximizeRiskAdjusted, MaximizeSafety, ObjectiveFunction, risk_adjusted_return,
};
use looplab_domain::entities::{MarketSnapshot, StrategyInput};
use looplab_domain::error::DomainError;
use looplab_domain::value_objects::StrategyResult;
use looplab_simulation::engine::simulate_strategy;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Errors raised while assembling a comparison.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    /// No snapshot was available for a strategy's market.
    #[error("No snapshot for market {market_id} (strategy {strategy})")]
    MissingSnapshot { strategy: String, market_id: String },
    /// A strategy failed to simulate.
    #[error(transparent)]
    Simulation(#[from] DomainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    HighestRoe,
    Safest,
    BestRiskReturn,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::HighestRoe => "Highest ROE",
            Badge::Safest => "Safest",
            Badge::BestRiskReturn => "Best risk/return",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub strategy: StrategyInput,
    pub result: StrategyResult,
    pub risk_adjusted_return: Decimal,
    pub badges: Vec<Badge>,
}

/// Awards badges across `entries`, keeping their order.
///
/// Every strategy tied for the best score of an objective receives its badge.
pub fn compare_strategies(entries: Vec<(StrategyInput, StrategyResult)>) -> Vec<ComparisonRow> {
    let objectives: [(Badge, &dyn ObjectiveFunction); 3] = [
        (Badge::HighestRoe, &MaximizeNetRoe),
        (Badge::Safest, &MaximizeSafety),
        (Badge::BestRiskReturn, &MaximizeRiskAdjusted),
    ];

    let best: Vec<(Badge, Option<Decimal>)> = objectives
        .iter()
        .map(|(badge, objective)| {
            let top = entries.iter().map(|(_, r)| objective.evaluate(r)).max();
            (*badge, top)
        })
        .collect();

    entries
        .into_iter()
        .map(|(strategy, result)| {
            let badges = objectives
                .iter()
                .zip(&best)
                .filter(|((_, objective), (_, top))| Some(objective.evaluate(&result)) == *top)
                .map(|((badge, _), _)| *badge)
                .collect();
            ComparisonRow {
                risk_adjusted_return: risk_adjusted_return(&result),
                strategy,
                result,
                badges,
            }
        })
        .collect()
}

/// Simulates each strategy against the snapshot returned by `snapshot_for`
/// and compares the results.
///
/// # Errors
/// Fails on the first strategy whose market has no snapshot or whose
/// simulation is rejected.
pub fn simulate_and_compare<F>(
    strategies: &[StrategyInput],
    mut snapshot_for: F,
) -> Result<Vec<ComparisonRow>, CompareError>
where
    F: FnMut(&str) -> Option<MarketSnapshot>,
{
    let mut entries = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let snapshot =
            snapshot_for(&strategy.market_id).ok_or_else(|| CompareError::MissingSnapshot {
                strategy: strategy.name.clone(),
                market_id: strategy.market_id.clone(),
            })?;
        let result = simulate_strategy(strategy, &snapshot)?;
        entries.push((strategy.clone(), result));
    }
    debug!(count = entries.len(), "Comparing strategies");
    Ok(compare_strategies(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use looplab_domain::entities::{AdvancedOverrides, Market};
    use looplab_domain::enums::{Network, ProviderName, RiskTarget};
    use rust_decimal_macros::dec;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot {
            market_id: "arb-aave-usdc".to_string(),
            supply_apy: dec!(0.052),
            borrow_apy: dec!(0.079),
            incentives_supply: dec!(0.015),
            incentives_borrow: dec!(0.01),
            ltv: dec!(0.72),
            liquidation_threshold: dec!(0.78),
            liquidation_bonus: dec!(0.06),
            available_liquidity: dec!(180000000),
            utilization: dec!(0.64),
            oracle_type: "Chainlink".to_string(),
            notes: vec![],
            risk_flags: vec![],
        }
    }

    fn strategy(name: &str, risk_target: RiskTarget) -> StrategyInput {
        let market = Market::new("arb-aave-usdc", "ARB / USDC Core", Network::Arbitrum, ProviderName::AaveV3);
        StrategyInput::new(name, &market, "ETH", "USDC", dec!(10000), risk_target)
    }

    #[test]
    fn test_empty_comparison() {
        assert!(compare_strategies(Vec::new()).is_empty());
    }

    #[test]
    fn test_badges_follow_objectives() {
        let strategies = vec![
            strategy("careful", RiskTarget::Drawdown15),
            strategy("balanced", RiskTarget::Drawdown25),
            strategy("aggressive", RiskTarget::Drawdown35),
        ];
        let rows = simulate_and_compare(&strategies, |_| Some(snapshot())).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].strategy.name, "careful");
        // Borrowing costs more than it earns here, so less leverage wins both ways.
        assert!(rows[0].badges.contains(&Badge::Safest));
        assert!(rows[0].badges.contains(&Badge::HighestRoe));
        assert!(rows[2].badges.is_empty());

        let awarded: usize = rows.iter().map(|r| r.badges.len()).sum();
        assert_eq!(awarded, 3);
    }

    #[test]
    fn test_ties_award_every_strategy() {
        let a = strategy("a", RiskTarget::Drawdown25);
        let b = strategy("b", RiskTarget::Drawdown25);
        let rows = simulate_and_compare(&[a, b], |_| Some(snapshot())).unwrap();
        assert!(rows.iter().all(|r| r.badges.len() == 3));
    }

    #[test]
    fn test_missing_snapshot() {
        let err = simulate_and_compare(&[strategy("x", RiskTarget::Drawdown15)], |_| None).unwrap_err();
        assert!(matches!(err, CompareError::MissingSnapshot { .. }));
    }

    #[test]
    fn test_invalid_strategy_propagates() {
        let broken = strategy("x", RiskTarget::Drawdown15).with_overrides(AdvancedOverrides {
            manual_ltv: Some(dec!(1.5)),
            ..Default::default()
        });
        let err = simulate_and_compare(&[broken], |_| Some(snapshot())).unwrap_err();
        assert!(matches!(err, CompareError::Simulation(DomainError::ManualLtvOutOfRange(_))));
    }
}
