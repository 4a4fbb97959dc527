//! Exact decimal values derived from integer quantities.
//!
//! `to_decimal` is the only way an integer amount becomes a fractional one,
//! and it performs no division at all: the quantity is reinterpreted as
//! `digits x 10^-exponent`, which is exact by construction. Every significant
//! digit survives until [`crate::format`] renders the value, the single place
//! where rounding is allowed to happen.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{AmountError, Result};
use crate::format::RoundingMode;
use crate::quantity::Quantity;

/// An exact decimal number backed by arbitrary-precision arithmetic.
///
/// Comparison and equality are numeric: `1.5 == 1.50`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecimalValue(BigDecimal);

impl DecimalValue {
    pub fn zero() -> Self {
        DecimalValue(BigDecimal::zero())
    }

    /// Reinterpret `quantity` as `quantity x 10^-exponent`, losslessly.
    pub fn from_quantity(quantity: &Quantity, exponent: u8) -> Self {
        DecimalValue(BigDecimal::new(
            quantity.bigint().clone(),
            i64::from(exponent),
        ))
    }

    /// Parse a decimal string. Used for exchange rates and other fields the
    /// api delivers in fractional form.
    pub fn parse(input: &str) -> Result<Self> {
        BigDecimal::from_str(input)
            .map(DecimalValue)
            .map_err(|_| AmountError::InvalidDecimal {
                input: input.to_string(),
            })
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    pub fn abs(&self) -> Self {
        DecimalValue(self.0.abs())
    }

    /// Round at `fraction_digits` decimal places.
    pub fn rounded(&self, fraction_digits: u32, mode: RoundingMode) -> Self {
        DecimalValue(
            self.0
                .with_scale_round(i64::from(fraction_digits), mode.to_bigdecimal()),
        )
    }

    /// Round to `digits` significant digits, keeping the magnitude.
    ///
    /// This is the fallback used for dust amounts: rounding `0.0023` to two
    /// decimal places yields zero, rounding it to two significant digits
    /// keeps `0.0023` visible.
    pub fn to_significant(&self, digits: u64, mode: RoundingMode) -> Self {
        if digits == 0 || self.0.is_zero() {
            return self.clone();
        }
        let current = self.0.digits();
        if current <= digits {
            return self.clone();
        }
        let (_, exponent) = self.0.as_bigint_and_exponent();
        let drop = (current - digits) as i64;
        DecimalValue(
            self.0
                .with_scale_round(exponent - drop, mode.to_bigdecimal()),
        )
    }

    /// `None` when `divisor` is zero. Terminating quotients are exact;
    /// non-terminating ones carry far more digits than any display needs.
    pub fn checked_div(&self, divisor: &DecimalValue) -> Option<DecimalValue> {
        if divisor.is_zero() {
            return None;
        }
        Some(DecimalValue(&self.0 / &divisor.0))
    }

    /// Scale back up by `10^exponent` and truncate toward zero.
    ///
    /// Inverse of [`to_decimal`] over the exact domain: a value produced by
    /// `to_decimal(q, e)` returns `q` unchanged.
    pub fn to_base_units(&self, exponent: u8) -> Quantity {
        let (digits, scale) = self.0.as_bigint_and_exponent();
        let shifted = BigDecimal::new(digits, scale - i64::from(exponent));
        let truncated = shifted.with_scale_round(0, RoundingMode::Down.to_bigdecimal());
        let (integer, _) = truncated.into_bigint_and_exponent();
        Quantity::from(integer)
    }

    pub fn to_f64(&self) -> Option<f64> {
        bigdecimal::ToPrimitive::to_f64(&self.0)
    }

    pub(crate) fn as_bigdecimal(&self) -> &BigDecimal {
        &self.0
    }
}

/// Scale `quantity` down by `10^exponent` with no precision loss.
pub fn to_decimal(quantity: &Quantity, exponent: u8) -> DecimalValue {
    DecimalValue::from_quantity(quantity, exponent)
}

/// Parse a raw base-unit string and scale it down in one step.
pub fn to_decimal_str(raw: &str, exponent: u8) -> Result<DecimalValue> {
    Ok(to_decimal(&Quantity::parse(raw)?, exponent))
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format(
            self,
            &crate::format::FormatOptions::default(),
        ))
    }
}

impl FromStr for DecimalValue {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self> {
        DecimalValue::parse(s)
    }
}

impl TryFrom<String> for DecimalValue {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self> {
        DecimalValue::parse(&value)
    }
}

impl From<DecimalValue> for String {
    fn from(value: DecimalValue) -> Self {
        value.to_string()
    }
}

impl From<u32> for DecimalValue {
    fn from(value: u32) -> Self {
        DecimalValue(BigDecimal::from(value))
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        DecimalValue(BigDecimal::from(value))
    }
}

impl Add for &DecimalValue {
    type Output = DecimalValue;

    fn add(self, rhs: &DecimalValue) -> DecimalValue {
        DecimalValue(&self.0 + &rhs.0)
    }
}

impl Sub for &DecimalValue {
    type Output = DecimalValue;

    fn sub(self, rhs: &DecimalValue) -> DecimalValue {
        DecimalValue(&self.0 - &rhs.0)
    }
}

impl Mul for &DecimalValue {
    type Output = DecimalValue;

    fn mul(self, rhs: &DecimalValue) -> DecimalValue {
        DecimalValue(&self.0 * &rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(raw: &str) -> Quantity {
        Quantity::parse(raw).unwrap()
    }

    #[test]
    fn conversion_is_exact() {
        let value = to_decimal(&quantity("1500000000000000000"), 18);
        assert_eq!(value, DecimalValue::parse("1.5").unwrap());
    }

    #[test]
    fn conversion_preserves_every_digit() {
        let value = to_decimal(&quantity("123456789123456789123456789"), 18);
        assert_eq!(value, DecimalValue::parse("123456789.123456789123456789").unwrap());
    }

    #[test]
    fn round_trip_reproduces_the_quantity() {
        let raw = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let value = to_decimal(&quantity(raw), 18);
        assert_eq!(value.to_base_units(18), quantity(raw));
    }

    #[test]
    fn scaling_back_truncates_toward_zero() {
        let value = DecimalValue::parse("1.59").unwrap();
        assert_eq!(value.to_base_units(1), quantity("15"));
        let negative = DecimalValue::parse("-1.59").unwrap();
        assert_eq!(negative.to_base_units(1), quantity("-15"));
    }

    #[test]
    fn multiplication_is_exact() {
        let coin = to_decimal(&quantity("1500000000000000000"), 18);
        let rate = DecimalValue::parse("2045.67").unwrap();
        assert_eq!(&coin * &rate, DecimalValue::parse("3068.505").unwrap());
    }

    #[test]
    fn division_by_zero_is_none() {
        let one = DecimalValue::from(1u32);
        assert_eq!(one.checked_div(&DecimalValue::zero()), None);
        assert_eq!(DecimalValue::zero().checked_div(&DecimalValue::zero()), None);
    }

    #[test]
    fn division_matches_expected_quotient() {
        let num = to_decimal(&quantity("5000000"), 0);
        let den = to_decimal(&quantity("10000000"), 0);
        let ratio = num.checked_div(&den).unwrap();
        assert_eq!(ratio, DecimalValue::parse("0.5").unwrap());
    }

    #[test]
    fn rounding_is_half_up_at_the_boundary() {
        let value = DecimalValue::parse("0.00005").unwrap();
        assert_eq!(
            value.rounded(4, RoundingMode::HalfUp),
            DecimalValue::parse("0.0001").unwrap()
        );
        let below = DecimalValue::parse("0.00004").unwrap();
        assert!(below.rounded(4, RoundingMode::HalfUp).is_zero());
    }

    #[test]
    fn significant_rounding_keeps_dust_visible() {
        let dust = DecimalValue::parse("0.0023456").unwrap();
        assert_eq!(
            dust.to_significant(2, RoundingMode::HalfUp),
            DecimalValue::parse("0.0023").unwrap()
        );
        // fewer digits than asked for stay untouched
        let tiny = DecimalValue::parse("0.002").unwrap();
        assert_eq!(
            tiny.to_significant(2, RoundingMode::HalfUp),
            DecimalValue::parse("0.002").unwrap()
        );
    }

    #[test]
    fn significant_rounding_handles_integers() {
        let value = DecimalValue::parse("123456").unwrap();
        assert_eq!(
            value.to_significant(2, RoundingMode::HalfUp),
            DecimalValue::parse("120000").unwrap()
        );
    }

    #[test]
    fn significant_rounding_can_carry_upward() {
        let value = DecimalValue::parse("999.9").unwrap();
        assert_eq!(
            value.to_significant(2, RoundingMode::HalfUp),
            DecimalValue::parse("1000").unwrap()
        );
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        for input in ["", "abc", "1,5", "$5"] {
            assert_eq!(
                DecimalValue::parse(input).unwrap_err(),
                AmountError::InvalidDecimal {
                    input: input.to_string()
                }
            );
        }
    }

    #[test]
    fn serde_round_trips_as_plain_string() {
        let value = to_decimal(&quantity("1500000000000000000"), 18);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"1.5\"");
        let back: DecimalValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
