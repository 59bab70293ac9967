//! Steady-state simulation of a leveraged lending loop.
//!
//! Given a strategy and a market snapshot, computes the leverage reached by
//! looping to the target LTV and the resulting yield and liquidation risk.
//! Every call is pure arithmetic on its arguments.

use crate::leverage_policy::ltv_used;
use looplab_domain::entities::{MarketSnapshot, StrategyInput};
use looplab_domain::error::DomainError;
use looplab_domain::math::leverage;
use looplab_domain::value_objects::{Assumptions, HealthFactor, StrategyResult};
use rust_decimal::Decimal;
use tracing::debug;

/// Labels of the assumption audit trail.
pub mod labels {
    pub const LTV_USED: &str = "LTV used";
    pub const LEVERAGE_MULTIPLIER: &str = "Leverage multiplier";
    pub const LIQUIDATION_THRESHOLD: &str = "Liquidation threshold";
    pub const LIQUIDATION_BONUS: &str = "Liquidation bonus";
    pub const SLIPPAGE: &str = "Slippage";
    pub const MIN_HEALTH_FACTOR: &str = "Minimum HF buffer";
    pub const DEPEG_HAIRCUT: &str = "Depeg haircut";
    pub const BORROW_SPIKE: &str = "Borrow spike";
}

/// Loop parameters shared by the engine and the break-even solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopParameters {
    pub ltv_used: Decimal,
    pub multiplier: Decimal,
    pub incentives_net: Decimal,
    pub fees: Decimal,
}

impl LoopParameters {
    /// Validates both inputs and derives the loop parameters.
    ///
    /// # Errors
    /// Propagates validation errors of the strategy or the snapshot.
    pub fn derive(input: &StrategyInput, snapshot: &MarketSnapshot) -> Result<Self, DomainError> {
        input.validate()?;
        snapshot.validate()?;

        let ltv_used = ltv_used(input);
        let multiplier = leverage::leverage_multiplier(ltv_used)
            .ok_or(DomainError::LeverageOverflow(ltv_used))?;

        Ok(Self {
            ltv_used,
            multiplier,
            incentives_net: snapshot.incentives_net(),
            fees: leverage::fee_rate(input.overrides.slippage_or_default()),
        })
    }
}

/// Simulates `input` on `snapshot`.
///
/// A strategy without debt (`ltv_used = 0`) reports an unbounded health
/// factor. A negative `distance_to_liq` means the position is already past
/// its liquidation point.
///
/// # Errors
/// Returns a [`DomainError`] if the strategy or the snapshot fails validation,
/// or [`DomainError::LeverageOverflow`] if the looped position does not fit
/// in a `Decimal`.
pub fn simulate_strategy(
    input: &StrategyInput,
    snapshot: &MarketSnapshot,
) -> Result<StrategyResult, DomainError> {
    let params = LoopParameters::derive(input, snapshot)?;

    let overflow = || DomainError::LeverageOverflow(params.ltv_used);

    let net_roe = leverage::net_roe(
        snapshot.supply_apy,
        snapshot.borrow_apy,
        params.multiplier,
        params.incentives_net,
        params.fees,
    )
    .ok_or_else(overflow)?;

    let collateral_value = input
        .initial_capital
        .checked_mul(params.multiplier)
        .ok_or_else(overflow)?;
    let debt_value = collateral_value
        .checked_sub(input.initial_capital)
        .ok_or_else(overflow)?;

    let health_factor =
        HealthFactor::from_position(collateral_value, debt_value, snapshot.liquidation_threshold)
            .ok_or_else(overflow)?;
    let liquidation_price = leverage::liquidation_price(
        collateral_value,
        debt_value,
        snapshot.liquidation_threshold,
    )
    .ok_or_else(overflow)?;
    let distance_to_liq = Decimal::ONE
        .checked_sub(liquidation_price)
        .ok_or_else(overflow)?;

    let overrides = &input.overrides;
    let assumptions = Assumptions::new()
        .with(labels::LTV_USED, params.ltv_used)
        .with(labels::LEVERAGE_MULTIPLIER, params.multiplier)
        .with(labels::LIQUIDATION_THRESHOLD, snapshot.liquidation_threshold)
        .with(labels::LIQUIDATION_BONUS, snapshot.liquidation_bonus)
        .with(labels::SLIPPAGE, overrides.slippage_or_default())
        .with(labels::MIN_HEALTH_FACTOR, overrides.min_health_factor_or_default())
        .with(labels::DEPEG_HAIRCUT, overrides.depeg_haircut_or_default())
        .with(labels::BORROW_SPIKE, overrides.borrow_spike_or_default());

    debug!(
        strategy = %input.id,
        market = %snapshot.market_id,
        ltv = %params.ltv_used,
        leverage = %params.multiplier,
        net_roe = %net_roe,
        health_factor = %health_factor,
        "Simulated strategy"
    );

    Ok(StrategyResult {
        net_roe,
        health_factor,
        liquidation_price,
        distance_to_liq,
        leverage: params.multiplier,
        supply_apy: snapshot.supply_apy,
        borrow_apy: snapshot.borrow_apy,
        incentives_net: params.incentives_net,
        fees: params.fees,
        assumptions,
    })
}
