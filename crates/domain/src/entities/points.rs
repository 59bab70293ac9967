use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsModelId(pub Uuid);

impl PointsModelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PointsModelId {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully diluted valuation under each scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdvScenarios {
    pub conservative: Decimal,
    pub base: Decimal,
    pub bull: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRange {
    pub min_points: Decimal,
    pub max_points: Decimal,
}

/// Token distribution details only used in pro mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_per_user: Option<Decimal>,
    /// Percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sybil_discount: Option<Decimal>,
    /// Percent of the allocation unlocked at TGE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tge_unlock: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_months: Option<u32>,
}

/// Points farming campaign and the airdrop valuation assumptions around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsModel {
    pub id: PointsModelId,
    pub project: String,
    pub points_per_day: Decimal,
    pub days: u32,
    pub multiplier: Decimal,
    /// Percent of FDV allocated to the airdrop.
    pub airdrop_percent: Decimal,
    pub fdv: FdvScenarios,
    pub range: PointsRange,
    #[serde(default)]
    pub pro: PointsProOptions,
}

impl PointsModel {
    /// # Errors
    /// Returns [`DomainError::InvalidPointsModel`] for the first failed bound.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fail = |reason: &str| Err(DomainError::InvalidPointsModel(reason.to_string()));

        if self.project.trim().is_empty() {
            return fail("project name is empty");
        }
        if self.points_per_day < Decimal::ZERO {
            return fail("points per day must be >= 0");
        }
        if self.days < 1 {
            return fail("days must be >= 1");
        }
        if self.multiplier < Decimal::new(1, 1) {
            return fail("multiplier must be >= 0.1");
        }
        if self.airdrop_percent < Decimal::ZERO {
            return fail("airdrop percent must be >= 0");
        }
        if [self.fdv.conservative, self.fdv.base, self.fdv.bull]
            .iter()
            .any(|fdv| *fdv < Decimal::ZERO)
        {
            return fail("FDV must be >= 0");
        }
        if self.range.min_points < Decimal::ZERO || self.range.max_points < Decimal::ZERO {
            return fail("points range must be >= 0");
        }
        Ok(())
    }
}
