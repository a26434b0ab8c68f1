//! Common utility functions for pricing calculations.
//!
//! This module provides shared functionality used across the calculators,
//! including rounding and margin derivation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Trailing digits of a full-precision quotient treated as residue.
const RESIDUE_DIGITS: u32 = 2;

/// Mantissas at or above this size fill Decimal's 28 significant digits.
const FULL_PRECISION: i128 = 10_i128.pow(26);

/// Largest money amount accepted from dashboard inputs: one trillion.
///
/// Every dashboard formula stays far inside the decimal range for amounts up
/// to this bound, the sliders' 2× multipliers and 1000-unit volume included.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(13.3333)), dec!(13.33));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to one decimal place, half-up.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::round_percent;
///
/// assert_eq!(round_percent(dec!(34.7826)), dec!(34.8));
/// ```
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Margin of `price` over `cost` in percent of price.
///
/// Returns `None` when the price is zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::margin_percent;
///
/// assert_eq!(margin_percent(dec!(125), dec!(100)), Some(dec!(20)));
/// assert_eq!(margin_percent(dec!(0), dec!(100)), None);
/// ```
pub fn margin_percent(
    price: Decimal,
    cost: Decimal,
) -> Option<Decimal> {
    (price - cost)
        .checked_div(price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

/// Rounds a unit count up to the next whole unit.
///
/// Quotients of repeating decimals fill all 28 digits and carry residue in
/// the last ones (`1000 / 3.333…` is `300.000…03`). For such a quotient the
/// last two digits are dropped before rounding up; any value with fewer
/// significant digits is rounded up as is.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pricing_core::calculations::common::ceil_units;
///
/// assert_eq!(ceil_units(dec!(300.0000000000000000000000003)), dec!(300));
/// assert_eq!(ceil_units(dec!(1.0000000000001)), dec!(2));
/// assert_eq!(ceil_units(dec!(299.2)), dec!(300));
/// ```
pub fn ceil_units(value: Decimal) -> Decimal {
    if value.mantissa().abs() < FULL_PRECISION {
        return value.ceil();
    }
    value
        .round_dp_with_strategy(
            value.scale().saturating_sub(RESIDUE_DIGITS),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .ceil()
}
