//! Decimal-string rendering with rounding and thousands grouping.
//!
//! Output is locale-invariant: `.` for the decimal point, `,` for grouping.
//! Rendering for a specific locale is a concern of the consuming layer; what
//! must hold here is that the same value always produces the same string and
//! that grouping never changes the numeric value.

use bigdecimal::rounding::RoundingMode as BigRounding;
use num_bigint::Sign;
use num_traits::Zero;
use tracing::warn;

use crate::decimal::{to_decimal, DecimalValue};
use crate::quantity::Quantity;

/// Upper bound on rendered fraction digits.
///
/// No currency carries more than 255 decimals; a larger request is a caller
/// bug and would only burn memory on zero padding.
pub const MAX_FRACTION_DIGITS: u32 = 255;

/// Rounding applied at the `max_fraction_digits` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// To nearest, ties away from zero: `0.125` at two digits is `0.13`.
    /// This is the mode monetary displays expect.
    #[default]
    HalfUp,
    /// To nearest, ties to the even digit.
    HalfEven,
    /// Truncate toward zero.
    Down,
    /// Away from zero.
    Up,
}

impl RoundingMode {
    pub(crate) fn to_bigdecimal(self) -> BigRounding {
        match self {
            RoundingMode::HalfUp => BigRounding::HalfUp,
            RoundingMode::HalfEven => BigRounding::HalfEven,
            RoundingMode::Down => BigRounding::Down,
            RoundingMode::Up => BigRounding::Up,
        }
    }
}

/// How to render a [`DecimalValue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Round at this many fraction digits. `None` renders the full exact
    /// value with nothing cut off.
    pub max_fraction_digits: Option<u32>,
    /// Pad with trailing zeros up to this many fraction digits.
    pub min_fraction_digits: u32,
    /// Insert `,` every three integer digits.
    pub grouping: bool,
    pub rounding: RoundingMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_fraction_digits: None,
            min_fraction_digits: 0,
            grouping: false,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl FormatOptions {
    /// Grouped full-precision display, the common table-cell shape.
    pub fn grouped() -> Self {
        FormatOptions {
            grouping: true,
            ..FormatOptions::default()
        }
    }

    /// Bounded fraction digits, no grouping.
    pub fn max_fraction(digits: u32) -> Self {
        FormatOptions {
            max_fraction_digits: Some(digits),
            ..FormatOptions::default()
        }
    }
}

/// Render `value` as a decimal string.
///
/// A value whose rounded magnitude is zero renders as `"0"`, never `"-0"`.
/// Trailing fraction zeros are trimmed down to `min_fraction_digits`.
pub fn format(value: &DecimalValue, opts: &FormatOptions) -> String {
    let decimal = match opts.max_fraction_digits {
        Some(requested) => {
            let capped = if requested > MAX_FRACTION_DIGITS {
                warn!(
                    "fraction digit request {} exceeds {}, clamping",
                    requested, MAX_FRACTION_DIGITS
                );
                MAX_FRACTION_DIGITS
            } else {
                requested
            };
            value
                .as_bigdecimal()
                .with_scale_round(i64::from(capped), opts.rounding.to_bigdecimal())
        }
        None => value.as_bigdecimal().clone(),
    };

    let (digits, exponent) = decimal.into_bigint_and_exponent();
    let min = opts.min_fraction_digits as usize;

    if digits.is_zero() {
        return assemble(false, "0", &"0".repeat(min));
    }

    let negative = digits.sign() == Sign::Minus;
    let unscaled = digits.magnitude().to_string();

    let (mut int_part, mut fraction) = if exponent <= 0 {
        let mut whole = unscaled;
        whole.push_str(&"0".repeat((-exponent) as usize));
        (whole, String::new())
    } else {
        let exp = exponent as usize;
        if unscaled.len() <= exp {
            let mut frac = "0".repeat(exp - unscaled.len());
            frac.push_str(&unscaled);
            ("0".to_string(), frac)
        } else {
            let split = unscaled.len() - exp;
            (unscaled[..split].to_string(), unscaled[split..].to_string())
        }
    };

    while fraction.len() > min && fraction.ends_with('0') {
        fraction.pop();
    }
    while fraction.len() < min {
        fraction.push('0');
    }

    if opts.grouping {
        int_part = group_thousands(&int_part);
    }

    assemble(negative, &int_part, &fraction)
}

/// Scale `quantity` by `10^-exponent` and render it in one step.
pub fn format_quantity(quantity: &Quantity, exponent: u8, opts: &FormatOptions) -> String {
    format(&to_decimal(quantity, exponent), opts)
}

fn assemble(negative: bool, int_part: &str, fraction: &str) -> String {
    let mut out = String::with_capacity(int_part.len() + fraction.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(int_part);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
