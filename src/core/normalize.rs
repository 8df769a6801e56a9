//! Raw ticker to display record
//!
//! Only the price is formatted here. Change, volume and the 24h range stay
//! raw and are formatted through accessors when a row is rendered.

use serde::Serialize;

use crate::core::format::{format_change, format_price, format_price_grouped, format_volume, parse_decimal};
use crate::core::symbols;
use crate::feed::RawTicker;

/// Direction of the 24h change, drives row coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero and unparsable changes count as `Up`
    pub fn from_change(raw: &str) -> Self {
        match parse_decimal(raw) {
            Some(value) if value.is_sign_negative() && !value.is_zero() => Trend::Down,
            _ => Trend::Up,
        }
    }

    pub fn is_up(self) -> bool {
        self == Trend::Up
    }
}

/// One board row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub symbol: String,
    /// Already formatted
    pub price: String,
    pub change: String,
    pub volume: String,
    pub high: String,
    pub low: String,
}

impl DisplayRecord {
    pub fn change_display(&self) -> String {
        format_change(&self.change)
    }

    pub fn volume_display(&self) -> String {
        format_volume(&self.volume)
    }

    pub fn high_display(&self) -> String {
        format_price(&self.high)
    }

    pub fn low_display(&self) -> String {
        format_price(&self.low)
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(&self.change)
    }

    pub fn display_name(&self) -> &str {
        symbols::display_name(&self.symbol)
    }

    pub fn base_asset(&self) -> &str {
        symbols::base_asset(&self.symbol)
    }
}

/// Build the display record for one raw ticker
///
/// The anchor symbol always gets two fraction digits with grouping, every
/// other symbol gets the magnitude-tiered price.
pub fn normalize(raw: RawTicker, anchor: &str) -> DisplayRecord {
    let price = if raw.symbol == anchor {
        format_price_grouped(&raw.last_price)
    } else {
        format_price(&raw.last_price)
    };

    DisplayRecord {
        symbol: raw.symbol,
        price,
        change: raw.price_change_percent,
        volume: raw.volume,
        high: raw.high_price,
        low: raw.low_price,
    }
}
