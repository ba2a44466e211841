//! Currency rounding.
//!
//! Every monetary output of a settlement (aguinaldo, cesantía and the total)
//! goes through [`round_currency`] independently.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on monetary amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds half-up (away from zero) to cents, always carrying two decimals.
///
/// # Examples
///
/// ```
/// use liquidacion_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round_currency(Decimal::from(70000)).to_string(), "70000.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
