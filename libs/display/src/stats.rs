//! Home-page indicator and stats-chart math.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use chainscope_units::{format, DecimalValue, FormatOptions};

const COMPACT_STEPS: [(Decimal, &str); 4] = [
    (dec!(1000000000000), "T"),
    (dec!(1000000000), "B"),
    (dec!(1000000), "M"),
    (dec!(1000), "K"),
];

/// Compact notation with at most two fraction digits: `1234` -> `"1.23K"`.
///
/// Rounding can carry a value across a step boundary (`999999` scales to
/// `999.999K` and rounds to `1000K`), in which case the label promotes to
/// the next suffix, matching the locale-aware formatter this replaces.
pub fn compact(value: Decimal) -> String {
    let magnitude = value.abs();
    match COMPACT_STEPS.iter().position(|(step, _)| magnitude >= *step) {
        Some(i) => {
            let (step, suffix) = COMPACT_STEPS[i];
            let scaled = round2(value / step);
            if scaled.abs() >= dec!(1000) && i > 0 {
                let (step, suffix) = COMPACT_STEPS[i - 1];
                return format!("{}{}", plain(round2(value / step)), suffix);
            }
            format!("{}{}", plain(scaled), suffix)
        }
        None => {
            let rounded = round2(value);
            if rounded.abs() >= dec!(1000) {
                return format!("{}K", plain(round2(value / dec!(1000))));
            }
            plain(rounded)
        }
    }
}

/// Fiat price label: grouped, at least two and at most six fraction digits.
pub fn fiat_price(value: Decimal) -> String {
    label(
        value,
        &FormatOptions {
            max_fraction_digits: Some(6),
            min_fraction_digits: 2,
            grouping: true,
            ..Default::default()
        },
    )
}

/// Grouped label trimmed to at most `max_dp` fraction digits. Shared by the
/// gas-tracker quote labels.
pub(crate) fn decimal_label(value: Decimal, max_dp: u32) -> String {
    label(
        value,
        &FormatOptions {
            max_fraction_digits: Some(max_dp),
            grouping: true,
            ..Default::default()
        },
    )
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn plain(value: Decimal) -> String {
    label(value, &FormatOptions::max_fraction(2))
}

fn label(value: Decimal, opts: &FormatOptions) -> String {
    // a Decimal always prints as a plain decimal string, so the parse
    // cannot fail; the fallback keeps this path panic-free anyway
    match DecimalValue::parse(&value.to_string()) {
        Ok(exact) => format(&exact, opts),
        Err(_) => value.to_string(),
    }
}

/// One dated sample of a stats chart, as the api delivers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// `None` marks a day the indexer had not covered yet.
    pub value: Option<Decimal>,
}

/// A sample after series preparation: gap-free and chronological.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Make an api series chart-ready.
///
/// Sorts by date, drops the run of unindexed days at the oldest end, and
/// zero-fills interior gaps. A series with no indexed day at all comes back
/// empty.
pub fn prepare_series(mut points: Vec<ChartPoint>) -> Vec<SeriesPoint> {
    points.sort_by_key(|point| point.date);
    let Some(first_indexed) = points.iter().position(|point| point.value.is_some()) else {
        return Vec::new();
    };
    points[first_indexed..]
        .iter()
        .map(|point| SeriesPoint {
            date: point.date,
            value: point.value.unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// `true` when a chart belongs to the requested section. `"all"` matches
/// every section.
pub fn section_matches(section_id: &str, requested: &str) -> bool {
    requested == "all" || section_id == requested
}

/// Case-insensitive substring match on a chart title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}
