//! Per-chain currency configuration.
//!
//! Decimal counts and symbols vary per chain, so they are passed to the
//! conversion entry points as an explicit value instead of being read from
//! process-wide state. Tests and multi-chain callers construct their own.

use serde::{Deserialize, Serialize};

use crate::denomination::ETHER_EXPONENT;

fn default_decimals() -> u8 {
    ETHER_EXPONENT
}

fn default_wei_label() -> String {
    "wei".to_string()
}

fn default_gwei_label() -> String {
    "Gwei".to_string()
}

/// Native-currency parameters of one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainCurrency {
    /// Ticker shown next to formatted amounts ("ETH", "xDAI").
    pub symbol: String,
    /// Base-unit digits in one whole coin. 18 on Ethereum-like chains, but
    /// configurable because some networks use a different native precision.
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default = "default_wei_label")]
    pub wei_label: String,
    #[serde(default = "default_gwei_label")]
    pub gwei_label: String,
}

impl ChainCurrency {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        ChainCurrency {
            symbol: symbol.into(),
            decimals,
            wei_label: default_wei_label(),
            gwei_label: default_gwei_label(),
        }
    }

    pub fn eth() -> Self {
        ChainCurrency::new("ETH", ETHER_EXPONENT)
    }
}

impl Default for ChainCurrency {
    fn default() -> Self {
        ChainCurrency::eth()
    }
}
