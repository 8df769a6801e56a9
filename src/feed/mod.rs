//! Upstream ticker feed
//!
//! Wire types, the `TickerSource` abstraction and the Binance REST client
//! that fills it.

pub mod binance;
pub mod errors;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use binance::{BinanceTickerSource, BINANCE_TICKER_24H_URL};
pub use errors::{FeedError, FeedResult};
pub use traits::TickerSource;
pub use types::RawTicker;
