//! Points / airdrop projection.
//!
//! Values a points farming campaign under three FDV scenarios.

use looplab_domain::entities::PointsModel;
use looplab_domain::enums::{Confidence, FdvScenario};
use looplab_domain::error::DomainError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Valuation of the expected points range under one FDV scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioValuation {
    pub scenario: FdvScenario,
    pub fdv: Decimal,
    pub value_per_point: Decimal,
    pub min_value: Decimal,
    pub max_value: Decimal,
}

/// TGE unlock followed by linear monthly vesting. Either side may be unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlockSchedule {
    pub tge_unlock_pct: Option<Decimal>,
    pub vesting_months: Option<u32>,
    /// Percent of the allocation released each vesting month; known only
    /// when both the TGE unlock and a non-zero vesting period are set.
    pub monthly_unlock_pct: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsProjection {
    pub total_points: Decimal,
    pub min_points: Decimal,
    pub max_points: Decimal,
    pub confidence: Confidence,
    pub scenarios: Vec<ScenarioValuation>,
    pub unlock: Option<UnlockSchedule>,
}

/// Projects the airdrop value of `model`.
///
/// The upper end of the points range is raised to the lower end when the
/// two are inverted.
///
/// # Errors
/// Returns [`DomainError::InvalidPointsModel`] if the model fails validation
/// or its valuation is out of range.
pub fn project_airdrop(model: &PointsModel) -> Result<PointsProjection, DomainError> {
    model.validate()?;
    let out_of_range =
        || DomainError::InvalidPointsModel("valuation exceeds the representable range".to_string());

    let total_points = model
        .points_per_day
        .checked_mul(Decimal::from(model.days))
        .and_then(|p| p.checked_mul(model.multiplier))
        .ok_or_else(out_of_range)?;
    let min_points = model.range.min_points;
    let max_points = model.range.max_points.max(min_points);

    let confidence = if min_points.is_zero() || max_points.is_zero() {
        Confidence::Low
    } else if min_points != max_points {
        Confidence::High
    } else {
        Confidence::Medium
    };

    let airdrop_share = model.airdrop_percent / Decimal::ONE_HUNDRED;
    let points_divisor = max_points.max(Decimal::ONE);
    let scenarios = [
        (FdvScenario::Conservative, model.fdv.conservative),
        (FdvScenario::Base, model.fdv.base),
        (FdvScenario::Bull, model.fdv.bull),
    ]
    .into_iter()
    .map(|(scenario, fdv)| {
        let value_per_point = fdv
            .checked_mul(airdrop_share)?
            .checked_div(points_divisor)?;
        Some(ScenarioValuation {
            scenario,
            fdv,
            value_per_point,
            min_value: value_per_point.checked_mul(min_points)?,
            max_value: value_per_point.checked_mul(max_points)?,
        })
    })
    .collect::<Option<Vec<_>>>()
    .ok_or_else(out_of_range)?;

    let (tge, months) = (model.pro.tge_unlock, model.pro.vesting_months);
    let unlock = (tge.is_some() || months.is_some()).then(|| UnlockSchedule {
        tge_unlock_pct: tge,
        vesting_months: months,
        monthly_unlock_pct: match (tge, months) {
            (Some(tge), Some(months)) if months > 0 => {
                Some((Decimal::ONE_HUNDRED - tge) / Decimal::from(months))
            }
            _ => None,
        },
    });

    Ok(PointsProjection {
        total_points,
        min_points,
        max_points,
        confidence,
        scenarios,
        unlock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use looplab_domain::entities::{FdvScenarios, PointsModelId, PointsProOptions, PointsRange};
    use rust_decimal_macros::dec;

    fn model(min: Decimal, max: Decimal) -> PointsModel {
        PointsModel {
            id: PointsModelId::new(),
            project: "Project X".to_string(),
            points_per_day: dec!(120),
            days: 90,
            multiplier: dec!(1.5),
            airdrop_percent: dec!(10),
            fdv: FdvScenarios {
                conservative: dec!(300000000),
                base: dec!(700000000),
                bull: dec!(1200000000),
            },
            range: PointsRange {
                min_points: min,
                max_points: max,
            },
            pro: PointsProOptions::default(),
        }
    }

    #[test]
    fn test_projection_arithmetic() {
        let projection = project_airdrop(&model(dec!(9000), dec!(14000))).unwrap();

        assert_eq!(projection.total_points, dec!(16200));
        assert_eq!(projection.confidence, Confidence::High);

        let conservative = &projection.scenarios[0];
        assert_eq!(conservative.scenario, FdvScenario::Conservative);
        // 300M * 10% / 14000
        assert!((conservative.value_per_point - dec!(2142.857142857)).abs() < dec!(0.000001));
        assert!((conservative.max_value - dec!(30000000)).abs() < dec!(0.0001));

        let bull = &projection.scenarios[2];
        assert_eq!(bull.scenario, FdvScenario::Bull);
        assert!((bull.min_value - dec!(77142857.142857)).abs() < dec!(0.001));
    }

    #[test]
    fn test_out_of_range_valuation_is_rejected() {
        let mut inflated = model(dec!(1), dec!(2));
        inflated.airdrop_percent = Decimal::MAX;
        inflated.fdv.bull = Decimal::MAX;
        assert!(matches!(
            project_airdrop(&inflated),
            Err(DomainError::InvalidPointsModel(_))
        ));
    }

    #[test]
    fn test_confidence_levels() {
        let low = project_airdrop(&model(Decimal::ZERO, dec!(100))).unwrap();
        assert_eq!(low.confidence, Confidence::Low);

        let medium = project_airdrop(&model(dec!(100), dec!(100))).unwrap();
        assert_eq!(medium.confidence, Confidence::Medium);
    }

    #[test]
    fn test_inverted_range_is_clamped() {
        let projection = project_airdrop(&model(dec!(500), dec!(200))).unwrap();
        assert_eq!(projection.max_points, dec!(500));
        assert_eq!(projection.confidence, Confidence::Medium);
    }

    #[test]
    fn test_zero_points_does_not_divide_by_zero() {
        let projection = project_airdrop(&model(Decimal::ZERO, Decimal::ZERO)).unwrap();
        assert_eq!(projection.scenarios[1].value_per_point, dec!(70000000));
        assert_eq!(projection.scenarios[1].max_value, Decimal::ZERO);
    }

    #[test]
    fn test_unlock_schedule() {
        let mut pro = model(dec!(1), dec!(2));
        pro.pro.tge_unlock = Some(dec!(15));
        pro.pro.vesting_months = Some(12);
        let unlock = project_airdrop(&pro).unwrap().unlock.unwrap();
        assert_eq!(unlock.monthly_unlock_pct, Some(dec!(85) / dec!(12)));

        assert!(project_airdrop(&model(dec!(1), dec!(2))).unwrap().unlock.is_none());
    }

    #[test]
    fn test_partial_unlock_terms_are_kept() {
        let mut tge_only = model(dec!(1), dec!(2));
        tge_only.pro.tge_unlock = Some(dec!(25));
        let unlock = project_airdrop(&tge_only).unwrap().unlock.unwrap();
        assert_eq!(unlock.tge_unlock_pct, Some(dec!(25)));
        assert_eq!(unlock.vesting_months, None);
        assert_eq!(unlock.monthly_unlock_pct, None);

        let mut vesting_only = model(dec!(1), dec!(2));
        vesting_only.pro.vesting_months = Some(6);
        let unlock = project_airdrop(&vesting_only).unwrap().unlock.unwrap();
        assert_eq!(unlock.tge_unlock_pct, None);
        assert_eq!(unlock.vesting_months, Some(6));
        assert_eq!(unlock.monthly_unlock_pct, None);

        let mut no_vesting = model(dec!(1), dec!(2));
        no_vesting.pro.tge_unlock = Some(dec!(100));
        no_vesting.pro.vesting_months = Some(0);
        let unlock = project_airdrop(&no_vesting).unwrap().unlock.unwrap();
        assert_eq!(unlock.monthly_unlock_pct, None);
    }
}
