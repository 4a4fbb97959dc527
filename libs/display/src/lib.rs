//! Explorer display math on top of [`chainscope_units`].
//!
//! Where the units crate answers "what is this amount exactly", this crate
//! answers the page-level questions: what a balance is worth in fiat, how a
//! block reward splits, how full a block was, which way a balance moved.
//! Everything stays pure and synchronous; callers fetch the api payloads and
//! hand them in as-is.
//!
//! ```
//! use chainscope_display::{currency_value, CurrencyParams};
//!
//! let value = currency_value(
//!     "1500000000000000000",
//!     &CurrencyParams { exchange_rate: Some("2000"), ..Default::default() },
//! )?;
//! assert_eq!(value.value, "1.5");
//! assert_eq!(value.usd.as_deref(), Some("3,000"));
//! # Ok::<(), chainscope_units::AmountError>(())
//! ```

pub mod balance;
pub mod currency_value;
pub mod gas;
pub mod reward;
pub mod stats;

pub use balance::{balance_change, balance_change_from_delta, BalanceChange, Direction};
pub use currency_value::{currency_value, CurrencyParams, CurrencyValue};
pub use gas::{
    clamped, fee_per_gas, gas_target_share, percent_of, signed_percent_of, utilization,
    FeePerGas, GasQuote, NetworkLoad,
};
pub use reward::{BlockRewards, RewardBreakdown, RewardEntry};
pub use stats::{
    compact, fiat_price, prepare_series, section_matches, title_matches, ChartPoint,
    SeriesPoint,
};
