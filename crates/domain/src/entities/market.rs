use crate::enums::{Network, ProviderName};
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A lending market a loop can be built on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub name: String,
    pub network: Network,
    pub provider: ProviderName,
}

impl Market {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        network: Network,
        provider: ProviderName,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            network,
            provider,
        }
    }
}

/// Rate and risk parameters of a market at a point in time.
///
/// Rates are annualized fractions (`0.048` is 4.8% APY).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub market_id: String,
    #[serde(rename = "supplyAPY")]
    pub supply_apy: Decimal,
    #[serde(rename = "borrowAPY")]
    pub borrow_apy: Decimal,
    pub incentives_supply: Decimal,
    pub incentives_borrow: Decimal,
    /// Maximum loan-to-value allowed when borrowing.
    pub ltv: Decimal,
    /// Debt-to-collateral ratio at which the position becomes liquidatable.
    pub liquidation_threshold: Decimal,
    /// Penalty fraction paid to liquidators.
    pub liquidation_bonus: Decimal,
    pub available_liquidity: Decimal,
    pub utilization: Decimal,
    pub oracle_type: String,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub risk_flags: Vec<String>,
}

impl MarketSnapshot {
    /// Net incentive rate paid on top of the base rates.
    pub fn incentives_net(&self) -> Decimal {
        self.incentives_supply + self.incentives_borrow
    }

    /// Checks `0 < liquidation_threshold <= 1` and `0 <= ltv < liquidation_threshold`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidSnapshot`] naming the broken bound.
    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidSnapshot {
            market_id: self.market_id.clone(),
            reason,
        };

        if self.liquidation_threshold <= Decimal::ZERO || self.liquidation_threshold > Decimal::ONE {
            return Err(invalid(format!(
                "liquidation threshold {} outside (0, 1]",
                self.liquidation_threshold
            )));
        }
        if self.ltv < Decimal::ZERO || self.ltv >= self.liquidation_threshold {
            return Err(invalid(format!(
                "ltv {} outside [0, {})",
                self.ltv, self.liquidation_threshold
            )));
        }
        Ok(())
    }
}
