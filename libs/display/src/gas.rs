//! Gas utilization, per-gas fee scaling and gas-tracker quotes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use chainscope_units::{
    format, format_quantity, ratio, ChainCurrency, DecimalValue, Denomination, FormatOptions,
    Quantity, Ratio, Result,
};

use crate::stats::decimal_label;

/// EIP-1559 elasticity: the base-fee target is the limit divided by this.
const TARGET_ELASTICITY: u32 = 2;

/// `gas_used / gas_limit`. `Undefined` on a zero limit.
pub fn utilization(gas_used: &Quantity, gas_limit: &Quantity) -> Ratio {
    ratio(gas_used, gas_limit)
}

/// Progress-bar value: the ratio clamped into `[0, 1]`.
///
/// The clamp lives here and not in [`ratio`] itself; the underlying number
/// stays honest even when an indexer reports more gas used than the limit.
pub fn clamped(value: &Ratio) -> Option<f64> {
    value.to_f64().map(|v| v.clamp(0.0, 1.0))
}

/// `"54.73%"` style label, always two fraction digits.
pub fn percent_of(value: &Ratio) -> Option<String> {
    let percent = value.value()? * &DecimalValue::from(100u32);
    let opts = FormatOptions {
        max_fraction_digits: Some(2),
        min_fraction_digits: 2,
        ..Default::default()
    };
    Some(format!("{}%", format(&percent, &opts)))
}

/// Deviation from the EIP-1559 gas target (half the limit): `0` on target,
/// `1` at the full limit, `-1` for an empty block.
pub fn gas_target_share(gas_used: &Quantity, gas_limit: &Quantity) -> Ratio {
    match ratio(gas_used, gas_limit) {
        Ratio::Value(share) => {
            let doubled = &share * &DecimalValue::from(TARGET_ELASTICITY);
            Ratio::Value(&doubled - &DecimalValue::from(1u32))
        }
        sentinel => sentinel,
    }
}

/// Signed percent label for target deviation: `"+50.00%"`, `"-12.50%"`.
/// Zero stays unsigned.
pub fn signed_percent_of(value: &Ratio) -> Option<String> {
    let exact = value.value()?;
    let label = percent_of(value)?;
    if exact.is_negative() || exact.is_zero() {
        Some(label)
    } else {
        Some(format!("+{label}"))
    }
}

/// Qualitative load bands for the gas tracker header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkLoad {
    Low,
    Medium,
    High,
}

impl NetworkLoad {
    /// Stats endpoints deliver utilization as a 0-100 number.
    pub fn classify(percentage: Decimal) -> Self {
        if percentage > dec!(80) {
            NetworkLoad::High
        } else if percentage > dec!(50) {
            NetworkLoad::Medium
        } else {
            NetworkLoad::Low
        }
    }

    /// Same bands for a ratio computed from block fields. Sentinels have no
    /// load to report.
    pub fn from_ratio(value: &Ratio) -> Option<Self> {
        let percent = value.value()? * &DecimalValue::from(100u32);
        Some(if percent > DecimalValue::from(80u32) {
            NetworkLoad::High
        } else if percent > DecimalValue::from(50u32) {
            NetworkLoad::Medium
        } else {
            NetworkLoad::Low
        })
    }
}

/// One gas-tracker price point, as the stats endpoint ships it.
///
/// Prices are gwei-denominated and bounded, so the fixed-precision decimal
/// type is enough here; nothing in a tracker quote approaches u256 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasQuote {
    /// Gwei per gas. `None` when the tracker has no estimate.
    pub price: Option<Decimal>,
    /// Fiat cost of a typical transfer at this price.
    pub fiat_price: Option<Decimal>,
    /// Expected confirmation delay in milliseconds.
    pub time: Option<Decimal>,
    pub base_fee: Option<Decimal>,
    pub priority_fee: Option<Decimal>,
}

impl GasQuote {
    /// `"12.34"`-style gwei label, at most two fraction digits.
    pub fn price_label(&self) -> Option<String> {
        self.price.map(|price| decimal_label(price, 2))
    }

    pub fn fiat_label(&self) -> Option<String> {
        self.fiat_price.map(|price| decimal_label(price, 2))
    }

    /// Base fee renders without fraction digits.
    pub fn base_fee_label(&self) -> Option<String> {
        self.base_fee.map(|fee| decimal_label(fee, 0))
    }

    pub fn priority_fee_label(&self) -> Option<String> {
        self.priority_fee.map(|fee| decimal_label(fee, 0))
    }

    /// Confirmation estimate in seconds; zero and missing delays stay out
    /// of the display.
    pub fn eta_seconds(&self) -> Option<Decimal> {
        match self.time {
            Some(ms) if ms > Decimal::ZERO => Some(ms / dec!(1000)),
            _ => None,
        }
    }
}

/// Whole-coin and gwei renderings of a per-gas amount in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeePerGas {
    pub ether: String,
    pub gwei: String,
}

/// Gas prices read better in gwei, fee totals in whole coins; detail pages
/// show both for the same raw value.
pub fn fee_per_gas(raw: &str, currency: &ChainCurrency) -> Result<FeePerGas> {
    let quantity = Quantity::parse(raw)?;
    let opts = FormatOptions::default();
    Ok(FeePerGas {
        ether: format_quantity(&quantity, Denomination::ether(currency).exponent(), &opts),
        gwei: format_quantity(&quantity, Denomination::gwei(currency).exponent(), &opts),
    })
}
