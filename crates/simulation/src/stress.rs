//! Stress engine.
//!
//! Applies a fixed battery of shocks to a base simulation. Each scenario is a
//! first-order approximation derived from the base result on its own: price
//! shocks scale the health factor and leave ROE untouched, borrow-rate shocks
//! subtract from ROE and leave the health factor untouched. Liquidation price
//! and leverage are not re-derived under shock.

use crate::engine::simulate_strategy;
use crate::leverage_policy::ltv_used;
use looplab_domain::entities::{MarketSnapshot, StrategyInput};
use looplab_domain::error::DomainError;
use looplab_domain::value_objects::{StrategyResult, StressResult};
use rust_decimal::Decimal;
use tracing::debug;

/// A single market shock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shock {
    /// Relative collateral price move (`-0.10` is a 10% drop).
    Price(Decimal),
    /// Absolute increase of the borrow APY.
    Borrow(Decimal),
}

/// A labelled shock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressScenario {
    pub label: &'static str,
    pub shock: Shock,
}

impl StressScenario {
    /// Derives the shocked metrics from `base`, or `None` if they fall out
    /// of range.
    #[must_use]
    pub fn apply(&self, base: &StrategyResult) -> Option<StressResult> {
        let (health_factor, net_roe) = match self.shock {
            Shock::Price(move_pct) => (
                base.health_factor
                    .scaled(Decimal::ONE.checked_add(move_pct)?)?,
                base.net_roe,
            ),
            Shock::Borrow(rate_increase) => {
                (base.health_factor, base.net_roe.checked_sub(rate_increase)?)
            }
        };

        Some(StressResult {
            label: self.label.to_string(),
            health_factor,
            net_roe,
        })
    }
}

/// The scenarios reported by [`stress_tests`], in output order.
pub const STRESS_SCENARIOS: [StressScenario; 5] = [
    StressScenario {
        label: "Preço -10%",
        shock: Shock::Price(Decimal::from_parts(10, 0, 0, true, 2)),
    },
    StressScenario {
        label: "Preço -20%",
        shock: Shock::Price(Decimal::from_parts(20, 0, 0, true, 2)),
    },
    StressScenario {
        label: "Preço -30%",
        shock: Shock::Price(Decimal::from_parts(30, 0, 0, true, 2)),
    },
    StressScenario {
        label: "Borrow +5%",
        shock: Shock::Borrow(Decimal::from_parts(5, 0, 0, false, 2)),
    },
    StressScenario {
        label: "Borrow +10%",
        shock: Shock::Borrow(Decimal::from_parts(10, 0, 0, false, 2)),
    },
];

/// Applies every scenario of [`STRESS_SCENARIOS`] to `base`.
///
/// Returns `None` if any shocked metric falls out of range.
#[must_use]
pub fn stress_from_base(base: &StrategyResult) -> Option<Vec<StressResult>> {
    STRESS_SCENARIOS.iter().map(|s| s.apply(base)).collect()
}

/// Simulates `input` once and derives the five stress scenarios from it.
///
/// # Errors
/// Propagates errors from [`simulate_strategy`], and returns
/// [`DomainError::LeverageOverflow`] if a shocked metric is out of range.
pub fn stress_tests(
    input: &StrategyInput,
    snapshot: &MarketSnapshot,
) -> Result<Vec<StressResult>, DomainError> {
    let base = simulate_strategy(input, snapshot)?;
    let results = stress_from_base(&base)
        .ok_or_else(|| DomainError::LeverageOverflow(ltv_used(input)))?;
    debug!(strategy = %input.id, scenarios = results.len(), "Stress tests computed");
    Ok(results)
}
