//! Wire types for the 24h ticker statistics endpoint
//!
//! The endpoint returns a JSON array with one object per instrument. All
//! decimal quantities are kept as strings: parsing is the formatters' job,
//! so one bad field never fails a whole batch. Decoding is lenient per
//! field (null or numeric decimals are accepted) and per entry (an element
//! without a string `symbol` is skipped).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decimal field as a string: JSON numbers keep their text, anything
/// other than a string or number becomes `""`
fn lenient_decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Counter or id field: wrong type or out of range falls back to the default
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One instrument entry of the 24h ticker response
///
/// Only `symbol`, `last_price`, `price_change_percent`, `volume`,
/// `high_price` and `low_price` are read downstream. Missing decimal
/// fields deserialize to an empty string and format as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTicker {
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_change: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_change_percent: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub weighted_avg_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub prev_close_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub last_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub bid_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub ask_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub open_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub high_price: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub low_price: String,
    /// 24h volume in base-asset units
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub volume: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quote_volume: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub open_time: u64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub close_time: u64,
    /// -1 when no trade happened in the window
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub first_id: i64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub last_id: i64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub count: u64,
}

impl RawTicker {
    /// Minimal ticker carrying the fields the dashboard reads
    pub fn new(symbol: &str, last_price: &str, price_change_percent: &str, volume: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            last_price: last_price.to_string(),
            price_change_percent: price_change_percent.to_string(),
            volume: volume.to_string(),
            ..Default::default()
        }
    }

    /// Set the 24h high/low range
    pub fn with_range(mut self, high_price: &str, low_price: &str) -> Self {
        self.high_price = high_price.to_string();
        self.low_price = low_price.to_string();
        self
    }
}

/// Decode a ticker array, skipping entries that are not usable records
///
/// Returns the records and how many entries were skipped. Only a body that
/// is not a JSON array is an error.
pub fn decode_ticker_batch(body: &str) -> serde_json::Result<(Vec<RawTicker>, usize)> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let total = entries.len();
    let tickers: Vec<RawTicker> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    let skipped = total - tickers.len();
    Ok((tickers, skipped))
}
