//! Error types for quantity parsing and conversion.
//!
//! Displaying a wrong number for a monetary value is worse than showing an
//! error state, so malformed input is always surfaced instead of being
//! coerced to zero. Zero denominators are not errors at all: they occur
//! routinely (zero total supply, zero collected fees) and are reported
//! through sentinel results instead, see [`crate::ratio::Ratio`].

use thiserror::Error;

/// Failures while parsing raw amount fields delivered by an indexing API.
///
/// Every failure is local to the field that produced it. A bad quantity in
/// one display slot must not take down its siblings, so these errors carry
/// the offending input and nothing else.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Input is not a decimal integer (optionally signed).
    #[error("Invalid quantity string: '{input}' - expected a decimal integer")]
    InvalidQuantity { input: String },

    /// Input is not a decimal number. Raised for exchange rates and prices.
    #[error("Invalid decimal string: '{input}' - expected numeric format")]
    InvalidDecimal { input: String },

    /// Input is not a usable decimal count for a token or native currency.
    #[error("Invalid decimal count: '{input}' - expected an integer in 0..=255")]
    InvalidPrecision { input: String },
}

pub type Result<T> = std::result::Result<T, AmountError>;
