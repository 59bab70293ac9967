use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fraction rendered as a percentage (`0.0236` displays as `2.36%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percentage(pub Decimal);

impl From<Decimal> for Percentage {
    fn from(fraction: Decimal) -> Self {
        Self(fraction)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        match self.0.checked_mul(Decimal::ONE_HUNDRED) {
            Some(percent) => write!(f, "{:.*}%", precision, percent.round_dp(precision as u32)),
            // Out of range as a percentage; show the raw fraction.
            None => write!(f, "{} (fraction)", self.0.normalize()),
        }
    }
}
