//! Power-of-ten denominations of a base unit.

use num_bigint::BigInt;

use crate::currency::ChainCurrency;
use crate::error::{AmountError, Result};

/// Exponent of the base unit itself.
pub const WEI_EXPONENT: u8 = 0;
/// Gwei is 10^9 base units on every supported chain, independent of how many
/// decimals the native currency carries.
pub const GWEI_EXPONENT: u8 = 9;
/// Default whole-coin exponent. Chains override it through [`ChainCurrency`].
pub const ETHER_EXPONENT: u8 = 18;

/// A named power-of-ten scale relative to the base unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Denomination {
    exponent: u8,
    label: Option<String>,
}

impl Denomination {
    /// The base unit itself (10^0).
    pub fn base(currency: &ChainCurrency) -> Self {
        Denomination {
            exponent: WEI_EXPONENT,
            label: Some(currency.wei_label.clone()),
        }
    }

    pub fn gwei(currency: &ChainCurrency) -> Self {
        Denomination {
            exponent: GWEI_EXPONENT,
            label: Some(currency.gwei_label.clone()),
        }
    }

    /// The whole-coin denomination, scaled by the chain's configured decimals.
    pub fn ether(currency: &ChainCurrency) -> Self {
        Denomination {
            exponent: currency.decimals,
            label: Some(currency.symbol.clone()),
        }
    }

    pub fn custom(exponent: u8) -> Self {
        Denomination {
            exponent,
            label: None,
        }
    }

    pub fn exponent(&self) -> u8 {
        self.exponent
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// `10^exponent` as an exact integer.
    pub fn scale(&self) -> BigInt {
        num_traits::pow(BigInt::from(10u32), usize::from(self.exponent))
    }
}

/// Parse a decimal-count field ("18") as shipped by token and config apis.
///
/// Counts above 255 make no sense for any currency and would only inflate
/// formatting work, so they are rejected along with non-numeric input.
pub fn parse_exponent(input: &str) -> Result<u8> {
    input
        .trim()
        .parse::<u8>()
        .map_err(|_| AmountError::InvalidPrecision {
            input: input.to_string(),
        })
}
