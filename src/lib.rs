//! Crypto Wall - live market board
//!
//! Polls a 24h ticker endpoint on a fixed interval and publishes a ranked,
//! display-ready snapshot:
//! - Ticker feed (Binance-compatible REST)
//! - Symbol classification into grid and ticker strip
//! - Volume ranking with a pinned anchor instrument
//! - Stale-response-safe snapshot publication

pub mod config;
pub mod core;
pub mod error;
pub mod feed;

pub use error::AppError;
