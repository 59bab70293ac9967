//! Closed-form arithmetic of a recursive supply/borrow loop.

use rust_decimal::Decimal;

/// Flat execution fee charged once per loop (0.3%).
pub const BASE_FEE_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 3);

/// Total collateral exposure per unit of own capital when looping up to `ltv`.
///
/// formula: 1 / (1 - ltv)
///
/// Returns `None` when `ltv >= 1`, where the geometric series diverges, or
/// when the result is out of range.
pub fn leverage_multiplier(ltv: Decimal) -> Option<Decimal> {
    if ltv >= Decimal::ONE {
        return None;
    }
    Decimal::ONE.checked_div(Decimal::ONE.checked_sub(ltv)?)
}

/// Base fee plus slippage, where slippage is given in percent.
pub fn fee_rate(slippage_pct: Decimal) -> Decimal {
    BASE_FEE_RATE + slippage_pct / Decimal::ONE_HUNDRED
}

/// Net return on equity of a loop.
///
/// Supply yield scales with total collateral, borrow cost with the borrowed
/// fraction `multiplier - 1`; incentives and fees apply once, unscaled.
///
/// Returns `None` on overflow.
pub fn net_roe(
    supply_apy: Decimal,
    borrow_apy: Decimal,
    multiplier: Decimal,
    incentives_net: Decimal,
    fees: Decimal,
) -> Option<Decimal> {
    let supply = supply_apy.checked_mul(multiplier)?;
    let borrow = borrow_apy.checked_mul(multiplier.checked_sub(Decimal::ONE)?)?;
    supply
        .checked_sub(borrow)?
        .checked_add(incentives_net)?
        .checked_sub(fees)
}

/// Price multiple at which debt reaches the liquidation threshold.
///
/// formula: (debt / liquidation_threshold) / collateral
///
/// Returns `None` if either divisor is zero or the quotient is out of range.
pub fn liquidation_price(
    collateral: Decimal,
    debt: Decimal,
    liquidation_threshold: Decimal,
) -> Option<Decimal> {
    debt.checked_div(liquidation_threshold)?.checked_div(collateral)
}

/// Borrow APY at which [`net_roe`] is zero.
///
/// `None` without leverage or on overflow.
pub fn break_even_borrow_rate(
    supply_apy: Decimal,
    multiplier: Decimal,
    incentives_net: Decimal,
    fees: Decimal,
) -> Option<Decimal> {
    let borrowed = multiplier.checked_sub(Decimal::ONE)?;
    supply_apy
        .checked_mul(multiplier)?
        .checked_add(incentives_net)?
        .checked_sub(fees)?
        .checked_div(borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_leverage_multiplier() {
        assert_eq!(leverage_multiplier(Decimal::ZERO), Some(Decimal::ONE));
        assert_eq!(leverage_multiplier(dec!(0.5)), Some(dec!(2)));
        assert_eq!(leverage_multiplier(Decimal::ONE), None);
        assert_eq!(leverage_multiplier(dec!(1.2)), None);

        let m = leverage_multiplier(dec!(0.65)).unwrap();
        assert!((m - dec!(2.857142857)).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_fee_rate() {
        assert_eq!(BASE_FEE_RATE, dec!(0.003));
        assert_eq!(fee_rate(Decimal::ZERO), dec!(0.003));
        assert_eq!(fee_rate(dec!(0.2)), dec!(0.005));
    }

    #[test]
    fn test_net_roe_without_leverage_is_supply_plus_incentives() {
        let roe = net_roe(dec!(0.05), dec!(0.08), Decimal::ONE, dec!(0.01), dec!(0.003));
        assert_eq!(roe, Some(dec!(0.057)));
    }

    #[test]
    fn test_extreme_leverage_is_checked() {
        let m = leverage_multiplier(dec!(0.9999999999999999999999999)).unwrap();
        assert_eq!(m, dec!(10000000000000000000000000));
        assert!(net_roe(dec!(0.05), dec!(0.08), m, dec!(0.01), dec!(0.003)).is_some());

        let huge = dec!(10000000000000000000000000000);
        let zero = Decimal::ZERO;
        assert_eq!(net_roe(dec!(10), zero, huge, zero, zero), None);
        assert_eq!(break_even_borrow_rate(dec!(10), huge, zero, zero), None);
        assert_eq!(liquidation_price(dec!(1), Decimal::MAX, dec!(0.5)), None);
    }

    #[test]
    fn test_liquidation_price() {
        // 2x leverage, threshold 0.8: debt 1000 / 0.8 / 2000 = 0.625
        assert_eq!(
            liquidation_price(dec!(2000), dec!(1000), dec!(0.8)),
            Some(dec!(0.625))
        );
        assert_eq!(liquidation_price(dec!(2000), dec!(1000), Decimal::ZERO), None);
    }

    #[test]
    fn test_break_even_undefined_without_leverage() {
        assert_eq!(
            break_even_borrow_rate(dec!(0.05), Decimal::ONE, dec!(0.01), dec!(0.003)),
            None
        );
        assert_eq!(
            break_even_borrow_rate(dec!(0.05), dec!(2), dec!(0.01), dec!(0.01)),
            Some(dec!(0.1))
        );
    }
}
