use crate::entities::market::Market;
use crate::enums::{Network, ProviderName, RiskTarget, StrategyMode};
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum health-factor buffer assumed when none is given.
pub const DEFAULT_MIN_HEALTH_FACTOR: Decimal = Decimal::from_parts(16, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(pub Uuid);

impl StrategyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StrategyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pro-mode overrides. Every field is optional and falls back to a
/// documented default when the engine reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOverrides {
    /// Target LTV replacing the risk-target recommendation. Must lie in `[0, 1)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_ltv: Option<Decimal>,
    /// Minimum health-factor buffer (default 1.6).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_health_factor: Option<Decimal>,
    /// Borrow-rate spike assumption (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrow_spike: Option<Decimal>,
    /// Slippage in percent (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slippage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidation_bonus: Option<Decimal>,
    /// Stablecoin depeg haircut (default 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depeg_haircut: Option<Decimal>,
    /// Capital below which looping stops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_stop_threshold: Option<Decimal>,
}

impl AdvancedOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn slippage_or_default(&self) -> Decimal {
        self.slippage.unwrap_or(Decimal::ZERO)
    }

    pub fn min_health_factor_or_default(&self) -> Decimal {
        self.min_health_factor.unwrap_or(DEFAULT_MIN_HEALTH_FACTOR)
    }

    pub fn depeg_haircut_or_default(&self) -> Decimal {
        self.depeg_haircut.unwrap_or(Decimal::ZERO)
    }

    pub fn borrow_spike_or_default(&self) -> Decimal {
        self.borrow_spike.unwrap_or(Decimal::ZERO)
    }
}

/// A user-authored loop strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyInput {
    pub id: StrategyId,
    pub name: String,
    pub network: Network,
    pub provider: ProviderName,
    pub market_id: String,
    pub collateral_asset: String,
    pub debt_asset: String,
    pub initial_capital: Decimal,
    pub risk_target: RiskTarget,
    #[serde(default)]
    pub mode: StrategyMode,
    #[serde(flatten)]
    pub overrides: AdvancedOverrides,
}

impl StrategyInput {
    /// Creates a simple-mode strategy on `market` with a fresh id.
    pub fn new(
        name: impl Into<String>,
        market: &Market,
        collateral_asset: impl Into<String>,
        debt_asset: impl Into<String>,
        initial_capital: Decimal,
        risk_target: RiskTarget,
    ) -> Self {
        Self {
            id: StrategyId::new(),
            name: name.into(),
            network: market.network,
            provider: market.provider,
            market_id: market.id.clone(),
            collateral_asset: collateral_asset.into(),
            debt_asset: debt_asset.into(),
            initial_capital,
            risk_target,
            mode: StrategyMode::Simple,
            overrides: AdvancedOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: StrategyId) -> Self {
        self.id = id;
        self
    }

    /// Switches to pro mode with the given overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: AdvancedOverrides) -> Self {
        self.mode = StrategyMode::Pro;
        self.overrides = overrides;
        self
    }

    /// # Errors
    /// Rejects non-positive capital, a manual LTV outside `[0, 1)` and
    /// overrides set on a simple-mode strategy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(DomainError::NonPositiveCapital(self.initial_capital));
        }
        if self.mode == StrategyMode::Simple && !self.overrides.is_empty() {
            return Err(DomainError::OverridesRequireProMode);
        }
        if let Some(ltv) = self.overrides.manual_ltv {
            if ltv < Decimal::ZERO || ltv >= Decimal::ONE {
                return Err(DomainError::ManualLtvOutOfRange(ltv));
            }
        }
        Ok(())
    }
}
