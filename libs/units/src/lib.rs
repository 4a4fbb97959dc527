//! Precision-safe conversion and formatting of blockchain quantities.
//!
//! Indexing backends deliver chain amounts as decimal-integer strings in the
//! smallest unit of the currency, because wei-scale values overflow every
//! native number type a transport might otherwise use. This crate turns those
//! strings into displayable amounts without ever touching floating point on
//! the way: a u256 balance has more mantissa than an f64 can hold, and a
//! display layer that rounds money silently is broken.
//!
//! ## Design
//!
//! - **Exact until the last step.** [`Quantity`] is an arbitrary-precision
//!   integer; [`to_decimal`] rescales it without dividing; only [`format`]
//!   rounds, at an explicit digit count with an explicit [`RoundingMode`].
//! - **Sentinels, not exceptions, for routine degeneracy.** Zero
//!   denominators are everyday data (zero supply, zero fees), so [`ratio`]
//!   and [`diff_percentage`] return [`Ratio::Undefined`] / [`Ratio::New`]
//!   variants instead of erroring. Malformed input strings are the opposite
//!   case: a violated upstream contract, surfaced as
//!   [`AmountError::InvalidQuantity`].
//! - **Configuration is explicit.** Chains differ in native decimals and
//!   symbol; callers pass a [`ChainCurrency`] instead of the library reading
//!   process-wide state.
//!
//! Everything here is pure and synchronous, with no I/O and no shared mutable
//! state, so it is safe to call from any number of rendering contexts at once.
//!
//! ## Quick Start
//!
//! ```
//! use chainscope_units::{format, to_decimal, FormatOptions, Quantity};
//!
//! let wei = Quantity::parse("1500000000000000000")?;
//! let coins = to_decimal(&wei, 18);
//! let opts = FormatOptions { max_fraction_digits: Some(4), ..Default::default() };
//! assert_eq!(format(&coins, &opts), "1.5");
//! # Ok::<(), chainscope_units::AmountError>(())
//! ```
//!
//! Derived ratios carry their degenerate cases in the result:
//!
//! ```
//! use chainscope_units::{ratio, Quantity};
//!
//! let used = Quantity::parse("12500000")?;
//! let limit = Quantity::parse("25000000")?;
//! assert_eq!(ratio(&used, &limit).to_f64(), Some(0.5));
//! assert!(ratio(&used, &Quantity::zero()).is_undefined());
//! # Ok::<(), chainscope_units::AmountError>(())
//! ```

pub mod currency;
pub mod decimal;
pub mod denomination;
pub mod error;
pub mod format;
pub mod quantity;
pub mod ratio;

pub use currency::ChainCurrency;
pub use decimal::{to_decimal, to_decimal_str, DecimalValue};
pub use denomination::{
    parse_exponent, Denomination, ETHER_EXPONENT, GWEI_EXPONENT, WEI_EXPONENT,
};
pub use error::{AmountError, Result};
pub use format::{format, format_quantity, FormatOptions, RoundingMode, MAX_FRACTION_DIGITS};
pub use quantity::{sum, Quantity};
pub use ratio::{diff_percentage, ratio, Ratio};
