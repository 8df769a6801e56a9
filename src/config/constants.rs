//! Application-wide constants and configuration defaults
//!
//! Every default can be overridden through an environment variable, which
//! also lets `.env` files tune a deployment without a YAML file.

use std::str::FromStr;
use std::time::Duration;

use crate::feed::BINANCE_TICKER_24H_URL;

/// Fallback poll period in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Fallback request timeout in seconds (kept below the poll period)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;

/// Fallback number of rows per list in the board log
pub const DEFAULT_SNAPSHOT_LOG_ROWS: usize = 5;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

// =============================================================================
// Feed
// =============================================================================

/// 24h ticker endpoint (default: Binance public API)
///
/// Environment variable: `TICKER_ENDPOINT`
pub fn ticker_endpoint() -> String {
    std::env::var("TICKER_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| BINANCE_TICKER_24H_URL.to_string())
}

/// Seconds between two timer-driven polls (default: 10)
///
/// Environment variable: `POLL_INTERVAL_SECS`
pub fn poll_interval_secs() -> u64 {
    env_or("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)
}

/// Per-request timeout in seconds (default: 8)
///
/// Environment variable: `REQUEST_TIMEOUT_SECS`
pub fn request_timeout_secs() -> u64 {
    env_or("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)
}

/// Poll period as a `Duration`
pub fn poll_interval() -> Duration {
    Duration::from_secs(poll_interval_secs())
}

// =============================================================================
// Board output
// =============================================================================

/// Rows per list printed by the board logger (default: 5)
///
/// Environment variable: `SNAPSHOT_LOG_ROWS`
pub fn snapshot_log_rows() -> usize {
    env_or("SNAPSHOT_LOG_ROWS", DEFAULT_SNAPSHOT_LOG_ROWS)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Print all configuration values (for startup logs)
pub fn log_configuration() {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Feed:");
    tracing::info!("  - Endpoint: {}", ticker_endpoint());
    tracing::info!("  - Poll interval: {:?}", poll_interval());
    tracing::info!("  - Request timeout: {}s", request_timeout_secs());
    tracing::info!("Board:");
    tracing::info!("  - Rows per list: {}", snapshot_log_rows());
    tracing::info!("==================================");
}
