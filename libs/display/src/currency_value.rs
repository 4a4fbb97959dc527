//! Coin and fiat display values for a raw amount field.

use serde::Serialize;

use chainscope_units::{
    format, parse_exponent, to_decimal, DecimalValue, FormatOptions, Quantity, Result,
    RoundingMode, ETHER_EXPONENT,
};

/// Display parameters for one amount field, mirroring the api's field shapes.
///
/// `decimals` stays a string because that is how token endpoints deliver it;
/// a malformed count is a data bug worth surfacing, not a thing to paper
/// over with a default.
#[derive(Debug, Clone, Default)]
pub struct CurrencyParams<'a> {
    /// Token decimal count. `None` falls back to the 18 of ether-like coins.
    pub decimals: Option<&'a str>,
    /// Coin fraction digits. `None` renders the full exact value.
    pub accuracy: Option<u32>,
    /// Fiat fraction digits.
    pub accuracy_usd: Option<u32>,
    /// Fiat units per whole coin, as a decimal string.
    pub exchange_rate: Option<&'a str>,
}

/// A formatted coin amount plus its optional fiat companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyValue {
    pub value: String,
    pub usd: Option<String>,
}

/// Convert a raw base-unit string into grouped display strings.
///
/// The fiat figure multiplies the exact coin value by the exchange rate
/// before anything is rounded, then rounds once at `accuracy_usd` digits.
/// When that single rounding step would collapse a nonzero amount to zero,
/// the amount is kept at `accuracy_usd` significant digits instead, so dust
/// balances render as `0.0000012` rather than a flat `0`.
pub fn currency_value(raw: &str, params: &CurrencyParams<'_>) -> Result<CurrencyValue> {
    let quantity = Quantity::parse(raw)?;
    let exponent = match params.decimals {
        Some(field) => parse_exponent(field)?,
        None => ETHER_EXPONENT,
    };
    let coin = to_decimal(&quantity, exponent);
    let value = format(
        &coin,
        &FormatOptions {
            max_fraction_digits: params.accuracy,
            grouping: true,
            ..Default::default()
        },
    );

    let usd = match params.exchange_rate {
        Some(rate) => {
            let rate = DecimalValue::parse(rate)?;
            Some(fiat_string(&(&coin * &rate), params.accuracy_usd))
        }
        None => None,
    };

    Ok(CurrencyValue { value, usd })
}

fn fiat_string(amount: &DecimalValue, accuracy: Option<u32>) -> String {
    let grouped = FormatOptions::grouped();
    match accuracy {
        Some(digits) if !amount.is_zero() => {
            let rounded = amount.rounded(digits, RoundingMode::HalfUp);
            if rounded.is_zero() {
                let kept = amount.to_significant(u64::from(digits), RoundingMode::HalfUp);
                format(&kept, &grouped)
            } else {
                format(&rounded, &grouped)
            }
        }
        _ => format(amount, &grouped),
    }
}
