//! Balance deltas for transaction state views.

use serde::Serialize;

use chainscope_units::{
    diff_percentage, format_quantity, FormatOptions, Quantity, Ratio, Result,
};

/// Which way a balance moved across a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Unchanged,
}

/// A coin or token balance delta, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceChange {
    /// Signed difference in base units.
    pub delta: Quantity,
    pub direction: Direction,
    /// Grouped absolute difference in coin units, full precision.
    pub magnitude: String,
    /// Relative change against the starting balance; `New` when the
    /// balance started at zero.
    pub change: Ratio,
}

/// Compute the delta between two raw balances. A missing balance counts as
/// zero, which is how the api reports untouched accounts.
pub fn balance_change(
    before: Option<&str>,
    after: Option<&str>,
    decimals: u8,
) -> Result<BalanceChange> {
    let before = parse_or_zero(before)?;
    let after = parse_or_zero(after)?;
    let delta = after.clone() - before.clone();
    Ok(assemble(before, delta, decimals))
}

/// Build the change from an explicit delta, for endpoints that report the
/// difference directly instead of both balances.
pub fn balance_change_from_delta(
    before: Option<&str>,
    delta: &str,
    decimals: u8,
) -> Result<BalanceChange> {
    let before = parse_or_zero(before)?;
    let delta = Quantity::parse(delta)?;
    Ok(assemble(before, delta, decimals))
}

fn parse_or_zero(raw: Option<&str>) -> Result<Quantity> {
    match raw {
        Some(raw) => Quantity::parse(raw),
        None => Ok(Quantity::zero()),
    }
}

fn assemble(before: Quantity, delta: Quantity, decimals: u8) -> BalanceChange {
    let after = before.clone() + delta.clone();
    let direction = if delta.is_zero() {
        Direction::Unchanged
    } else if delta.is_negative() {
        Direction::Decrease
    } else {
        Direction::Increase
    };
    let magnitude = format_quantity(&delta.abs(), decimals, &FormatOptions::grouped());
    BalanceChange {
        change: diff_percentage(&before, &after),
        delta,
        direction,
        magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_balance_increase() {
        let change = balance_change(
            Some("1000000000000000000"),
            Some("2500000000000000000"),
            18,
        )
        .unwrap();
        assert_eq!(change.direction, Direction::Increase);
        assert_eq!(change.magnitude, "1.5");
        assert_eq!(change.delta, Quantity::from(1_500_000_000_000_000_000_u64));
        let relative = change.change.value().unwrap();
        assert_eq!(relative.to_string(), "1.5");
    }

    #[test]
    fn coin_balance_decrease() {
        let change = balance_change(
            Some("2000000000000000000"),
            Some("500000000000000000"),
            18,
        )
        .unwrap();
        assert_eq!(change.direction, Direction::Decrease);
        assert_eq!(change.magnitude, "1.5");
        assert_eq!(change.change.value().unwrap().to_string(), "-0.75");
    }

    #[test]
    fn untouched_balance_is_unchanged() {
        let change = balance_change(Some("7000"), Some("7000"), 18).unwrap();
        assert_eq!(change.direction, Direction::Unchanged);
        assert_eq!(change.magnitude, "0");
        assert_eq!(change.change.value().unwrap().to_string(), "0");
    }

    #[test]
    fn missing_before_marks_the_balance_new() {
        let change = balance_change(None, Some("500000000000000000"), 18).unwrap();
        assert_eq!(change.direction, Direction::Increase);
        assert_eq!(change.magnitude, "0.5");
        assert!(change.change.is_new());
    }

    #[test]
    fn explicit_delta_covers_the_token_path() {
        let change = balance_change_from_delta(Some("1000000"), "-250000", 6).unwrap();
        assert_eq!(change.direction, Direction::Decrease);
        assert_eq!(change.magnitude, "0.25");
        assert_eq!(change.change.value().unwrap().to_string(), "-0.25");
    }

    #[test]
    fn magnitude_is_grouped_at_full_precision() {
        let change = balance_change(Some("0"), Some("1234567000000000000000"), 18).unwrap();
        assert_eq!(change.magnitude, "1,234.567");
        assert!(change.change.is_new());
    }

    #[test]
    fn malformed_balances_are_rejected() {
        assert!(balance_change(Some("1.5"), Some("2"), 18).is_err());
        assert!(balance_change_from_delta(None, "0x10", 18).is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Increase).unwrap(), "\"increase\"");
        assert_eq!(serde_json::to_string(&Direction::Unchanged).unwrap(), "\"unchanged\"");
    }
}
