//! Derived ratios with sentinel results instead of exceptions.
//!
//! Zero denominators show up constantly in explorer data, from tokens with
//! zero total supply to blocks that collected no fees. Call sites used to
//! carry their own inline zero-checks; centralizing the branch here gives
//! every caller the same behavior through one tagged result.

use serde::Serialize;

use crate::decimal::DecimalValue;
use crate::quantity::Quantity;

/// Result of a quantity division.
///
/// Never NaN or infinity, and never a panic: degenerate inputs map to the
/// sentinel variants and the rendering layer decides how to draw them
/// (a placeholder for [`Ratio::Undefined`], a "new" badge for [`Ratio::New`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ratio {
    /// The exact quotient.
    Value(DecimalValue),
    /// Denominator was zero.
    Undefined,
    /// Baseline was zero: the compared amount appeared from nothing.
    New,
}

impl Ratio {
    pub fn value(&self) -> Option<&DecimalValue> {
        match self {
            Ratio::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Ratio::Undefined)
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Ratio::New)
    }

    /// Lossy view for progress bars and charts. Sentinels stay `None`.
    pub fn to_f64(&self) -> Option<f64> {
        self.value().and_then(DecimalValue::to_f64)
    }
}

/// `numerator / denominator`, or [`Ratio::Undefined`] when the denominator
/// is zero. For utilization-style inputs (used vs. limit) the value lies in
/// `[0, 1]`; the function itself does not clamp.
pub fn ratio(numerator: &Quantity, denominator: &Quantity) -> Ratio {
    let numerator = DecimalValue::from_quantity(numerator, 0);
    let denominator = DecimalValue::from_quantity(denominator, 0);
    match numerator.checked_div(&denominator) {
        Some(value) => Ratio::Value(value),
        None => Ratio::Undefined,
    }
}

/// Relative balance change `(after - before) / before`.
///
/// Positive means an increase. A zero baseline returns [`Ratio::New`]
/// instead of dividing: the balance did not change, it appeared.
pub fn diff_percentage(before: &Quantity, after: &Quantity) -> Ratio {
    if before.is_zero() {
        return Ratio::New;
    }
    let delta = after.clone() - before.clone();
    let delta = DecimalValue::from_quantity(&delta, 0);
    let baseline = DecimalValue::from_quantity(before, 0);
    match delta.checked_div(&baseline) {
        Some(value) => Ratio::Value(value),
        None => Ratio::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format, FormatOptions};

    fn quantity(raw: &str) -> Quantity {
        Quantity::parse(raw).unwrap()
    }

    #[test]
    fn halves_come_out_exact() {
        let result = ratio(&quantity("5000000"), &quantity("10000000"));
        assert_eq!(result.to_f64(), Some(0.5));
        assert_eq!(
            result.value(),
            Some(&DecimalValue::parse("0.5").unwrap())
        );
    }

    #[test]
    fn zero_denominator_is_a_sentinel() {
        let result = ratio(&quantity("5000000"), &quantity("0"));
        assert!(result.is_undefined());
        assert_eq!(result.to_f64(), None);
    }

    #[test]
    fn zero_over_zero_is_undefined_not_nan() {
        let result = ratio(&Quantity::zero(), &Quantity::zero());
        assert!(result.is_undefined());
    }

    #[test]
    fn utilization_inputs_stay_within_unit_interval() {
        let result = ratio(&quantity("12500000"), &quantity("30000000"));
        let value = result.to_f64().unwrap();
        assert!(value > 0.0 && value < 1.0);
    }

    #[test]
    fn growth_is_positive_and_exact() {
        let result = diff_percentage(&quantity("100"), &quantity("150"));
        assert_eq!(
            result.value(),
            Some(&DecimalValue::parse("0.5").unwrap())
        );
    }

    #[test]
    fn shrinkage_is_negative() {
        let result = diff_percentage(&quantity("150"), &quantity("100"));
        let value = result.value().unwrap();
        assert!(value.is_negative());
        assert_eq!(
            format(value, &FormatOptions::max_fraction(4)),
            "-0.3333"
        );
    }

    #[test]
    fn zero_baseline_is_new() {
        assert!(diff_percentage(&quantity("0"), &quantity("150")).is_new());
        assert!(diff_percentage(&Quantity::zero(), &Quantity::zero()).is_new());
    }

    #[test]
    fn unchanged_balance_is_zero_change() {
        let result = diff_percentage(&quantity("70"), &quantity("70"));
        assert!(result.value().unwrap().is_zero());
    }
}
