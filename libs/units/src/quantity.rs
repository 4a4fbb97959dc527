//! Integer amounts in the smallest unit of a currency.
//!
//! Indexing APIs ship amount fields as decimal-integer strings to avoid
//! precision loss in transit ("21000000000000000000"). [`Quantity`] is the
//! parsed form: an arbitrary-precision integer with exact arithmetic. Native
//! floats never touch these values; a u256 balance does not fit in an f64
//! mantissa and silently rounding one is a display bug of the worst kind.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{AmountError, Result};

/// An amount in base units (wei-like), immutable after creation.
///
/// Negative values are permitted because balance deltas need them. Raw
/// on-chain amounts (gas, fees, supplies) are expected to be non-negative;
/// that domain restriction belongs to the caller and is not enforced here.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity(BigInt);

impl Quantity {
    pub fn zero() -> Self {
        Quantity(BigInt::zero())
    }

    /// Parse a decimal-integer string, optionally signed.
    ///
    /// Accepts an optional sign followed by digits and nothing else: no
    /// whitespace, no separators, no fraction, no exponent, no radix
    /// prefixes. Anything else is an upstream data contract violation and
    /// comes back as [`AmountError::InvalidQuantity`].
    pub fn parse(input: &str) -> Result<Self> {
        let digits = match input.as_bytes() {
            [b'+' | b'-', rest @ ..] => rest,
            rest => rest,
        };
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(AmountError::InvalidQuantity {
                input: input.to_string(),
            });
        }
        let value = BigInt::from_str(input).map_err(|_| AmountError::InvalidQuantity {
            input: input.to_string(),
        })?;
        Ok(Quantity(value))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    pub fn abs(&self) -> Self {
        Quantity(self.0.abs())
    }

    pub(crate) fn bigint(&self) -> &BigInt {
        &self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Quantity {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self> {
        Quantity::parse(s)
    }
}

impl TryFrom<String> for Quantity {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self> {
        Quantity::parse(&value)
    }
}

impl From<Quantity> for String {
    fn from(quantity: Quantity) -> Self {
        quantity.0.to_string()
    }
}

impl From<BigInt> for Quantity {
    fn from(value: BigInt) -> Self {
        Quantity(value)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(BigInt::from(value))
    }
}

impl From<u128> for Quantity {
    fn from(value: u128) -> Self {
        Quantity(BigInt::from(value))
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity(BigInt::from(value))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity(-self.0)
    }
}

/// Exact total of a collection of amounts.
///
/// Integer addition is commutative and associative, so the result never
/// depends on iteration order, which matters when fee components are
/// collected from maps or api arrays.
pub fn sum<I: IntoIterator<Item = Quantity>>(quantities: I) -> Quantity {
    quantities.into_iter().sum()
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        Quantity(iter.fold(BigInt::zero(), |acc, q| acc + q.0))
    }
}

impl<'a> Sum<&'a Quantity> for Quantity {
    fn sum<I: Iterator<Item = &'a Quantity>>(iter: I) -> Self {
        Quantity(iter.fold(BigInt::zero(), |acc, q| acc + &q.0))
    }
}
