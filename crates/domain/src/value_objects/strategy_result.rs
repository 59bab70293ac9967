use crate::value_objects::health_factor::HealthFactor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value recorded in the assumption audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssumptionValue {
    Number(Decimal),
    Text(String),
}

impl AssumptionValue {
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }
}

impl From<Decimal> for AssumptionValue {
    fn from(v: Decimal) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for AssumptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl fmt::Display for AssumptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v.normalize()),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub label: String,
    pub value: AssumptionValue,
}

/// Ordered label → value record of the inputs a simulation actually used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assumptions(Vec<Assumption>);

impl Assumptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `label`, replacing any earlier entry with that label.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<AssumptionValue>) -> Self {
        let label = label.into();
        let value = value.into();
        match self.0.iter_mut().find(|a| a.label == label) {
            Some(existing) => existing.value = value,
            None => self.0.push(Assumption { label, value }),
        }
        self
    }

    pub fn get(&self, label: &str) -> Option<&AssumptionValue> {
        self.0.iter().find(|a| a.label == label).map(|a| &a.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assumption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Steady-state metrics of a loop strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Net annualized return on the user's own capital.
    pub net_roe: Decimal,
    pub health_factor: HealthFactor,
    /// Price level, as a multiple of the current price, at which liquidation starts.
    pub liquidation_price: Decimal,
    /// Fractional price drop tolerated before liquidation. Negative when
    /// the position is already under-collateralized.
    pub distance_to_liq: Decimal,
    pub leverage: Decimal,
    pub supply_apy: Decimal,
    pub borrow_apy: Decimal,
    pub incentives_net: Decimal,
    pub fees: Decimal,
    pub assumptions: Assumptions,
}
