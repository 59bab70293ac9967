use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health factor of a leveraged position.
///
/// A position without debt cannot be liquidated, so its health factor is
/// reported as `Unbounded` instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthFactor {
    Finite(Decimal),
    Unbounded,
}

impl HealthFactor {
    /// Collateral value times liquidation threshold, divided by debt value.
    ///
    /// Returns `None` if the product is out of range.
    pub fn from_position(
        collateral: Decimal,
        debt: Decimal,
        liquidation_threshold: Decimal,
    ) -> Option<Self> {
        if debt.is_zero() {
            return Some(Self::Unbounded);
        }
        collateral
            .checked_mul(liquidation_threshold)?
            .checked_div(debt)
            .map(Self::Finite)
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Scales a finite health factor; an unbounded one stays unbounded.
    ///
    /// Returns `None` if the scaled value is out of range.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Option<Self> {
        match self {
            Self::Finite(v) => v.checked_mul(factor).map(Self::Finite),
            Self::Unbounded => Some(Self::Unbounded),
        }
    }

    pub fn is_below(&self, threshold: Decimal) -> bool {
        match self {
            Self::Finite(v) => *v < threshold,
            Self::Unbounded => false,
        }
    }
}

impl fmt::Display for HealthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{:.2}", v.round_dp(2)),
            Self::Unbounded => f.write_str("∞"),
        }
    }
}
