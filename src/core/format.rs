//! Display formatters for raw decimal strings
//!
//! Every formatter is total: an unparsable input yields a fixed placeholder
//! instead of an error, so one bad field never blanks a row.
//!
//! # Rounding
//! All precision reductions use `RoundingStrategy::MidpointAwayFromZero`
//! on exact decimals (`rust_decimal`), i.e. `0.0000125` at 6 digits is
//! `0.000013`. Thousands grouping follows en-US (`,` every three digits).

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown for unparsable or zero prices
pub const PRICE_PLACEHOLDER: &str = "0.0000";

/// Shown for unparsable price changes
pub const CHANGE_PLACEHOLDER: &str = "0.00%";

/// Shown for unparsable volumes
pub const VOLUME_PLACEHOLDER: &str = "0";

const THOUSAND: Decimal = Decimal::ONE_THOUSAND;
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
const BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Parse an upstream decimal string
///
/// Accepts plain (`"65000.50"`) and scientific (`"1.5e-7"`) notation,
/// surrounding whitespace ignored. Anything else is `None`.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Round to exactly `dp` fractional digits
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Insert `,` separators into the integer part of a fixed-point string
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Tiered price display
///
/// - unparsable or zero → `"0.0000"`
/// - |x| < 1 → 6 fractional digits
/// - |x| < 100 → 4 fractional digits
/// - otherwise 2 fractional digits with thousands grouping
pub fn format_price(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(value) if !value.is_zero() => {
            let magnitude = value.abs();
            if magnitude < Decimal::ONE {
                fixed(value, 6)
            } else if magnitude < Decimal::ONE_HUNDRED {
                fixed(value, 4)
            } else {
                group_thousands(&fixed(value, 2))
            }
        }
        _ => PRICE_PLACEHOLDER.to_string(),
    }
}

/// Price display ignoring magnitude tiers: always 2 digits, grouped
///
/// Used for the anchor instrument. Same placeholder rule as `format_price`.
pub fn format_price_grouped(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(value) if !value.is_zero() => group_thousands(&fixed(value, 2)),
        _ => PRICE_PLACEHOLDER.to_string(),
    }
}

/// Signed percent-change display: `+3.20%`, `-1.50%`
///
/// Values ≥ 0 get an explicit `+`. The sign follows the raw value, so
/// `-0.001` renders as `-0.00%`.
pub fn format_change(raw: &str) -> String {
    match parse_decimal(raw) {
        Some(value) => {
            let sign = if value >= Decimal::ZERO { '+' } else { '-' };
            format!("{}{}%", sign, fixed(value.abs(), 2))
        }
        None => CHANGE_PLACEHOLDER.to_string(),
    }
}

/// Compact volume display: `1.5B`, `12.3M`, `2.5K`, `999`
pub fn format_volume(raw: &str) -> String {
    let Some(value) = parse_decimal(raw) else {
        return VOLUME_PLACEHOLDER.to_string();
    };

    let magnitude = value.abs();
    if magnitude >= BILLION {
        format!("{}B", fixed(value / BILLION, 1))
    } else if magnitude >= MILLION {
        format!("{}M", fixed(value / MILLION, 1))
    } else if magnitude >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 1))
    } else {
        fixed(value, 0)
    }
}

/// 24-hour wall clock `HH:MM:SS` in the timestamp's own zone
pub fn format_clock<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%H:%M:%S").to_string()
}
