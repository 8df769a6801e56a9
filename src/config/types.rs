//! Configuration types for the dashboard
//!
//! Loaded from YAML; every section and field has a default so an empty
//! file (or no file at all) yields the stock Binance board.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::constants;
use crate::error::{AppError, Result};

// ============================================================================
// Default symbol universe
// ============================================================================

/// Hero instrument pinned to the top of the grid
pub const DEFAULT_ANCHOR_SYMBOL: &str = "BTCUSDT";

/// Grid instruments (anchor included)
pub const DEFAULT_PRIMARY_SYMBOLS: &[&str] = &[
    "BTCUSDT", "ETHUSDT", "BNBUSDT", "XRPUSDT", "ADAUSDT",
    "SOLUSDT", "TRXUSDT", "DOTUSDT", "LTCUSDT",
];

/// Ticker strip instruments
pub const DEFAULT_SECONDARY_SYMBOLS: &[&str] = &[
    "DOGEUSDT", "MATICUSDT", "AVAXUSDT", "LINKUSDT", "ATOMUSDT",
    "UNIUSDT", "ETCUSDT", "XLMUSDT", "BCHUSDT", "FILUSDT",
    "APTUSDT", "NEARUSDT", "ALGOUSDT", "VETUSDT", "ICPUSDT",
    "FTMUSDT", "SANDUSDT", "MANAUSDT", "AXSUSDT", "THETAUSDT",
    "EOSUSDT",
];

fn to_owned_list(symbols: &[&str]) -> Vec<String> {
    symbols.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Upstream feed and polling cadence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// 24h ticker endpoint URL
    pub endpoint: String,
    /// Fixed period between timer-driven polls
    pub poll_interval_secs: u64,
    /// Per-request timeout, must be shorter than the poll period
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::ticker_endpoint(),
            poll_interval_secs: constants::poll_interval_secs(),
            request_timeout_secs: constants::request_timeout_secs(),
        }
    }
}

impl FeedConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate feed configuration rules
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(AppError::Config("Feed endpoint cannot be empty".to_string()));
        }

        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Feed endpoint must be an http(s) URL (got {})",
                endpoint
            )));
        }

        if self.poll_interval_secs == 0 {
            return Err(AppError::Config(
                "poll_interval_secs must be > 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be > 0".to_string(),
            ));
        }

        // Bounds the overlap between a slow request and the next tick
        if self.request_timeout_secs >= self.poll_interval_secs {
            return Err(AppError::Config(format!(
                "request_timeout_secs ({}) must be < poll_interval_secs ({})",
                self.request_timeout_secs, self.poll_interval_secs
            )));
        }

        Ok(())
    }
}

/// Static symbol membership for the grid and the ticker strip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SymbolConfig {
    /// Instrument always shown first in the grid
    pub anchor: String,
    /// Grid instruments, anchor included
    pub primary: Vec<String>,
    /// Ticker strip instruments, disjoint from `primary`
    pub secondary: Vec<String>,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR_SYMBOL.to_string(),
            primary: to_owned_list(DEFAULT_PRIMARY_SYMBOLS),
            secondary: to_owned_list(DEFAULT_SECONDARY_SYMBOLS),
        }
    }
}

impl SymbolConfig {
    /// Validate symbol configuration rules
    pub fn validate(&self) -> Result<()> {
        if self.anchor.trim().is_empty() {
            return Err(AppError::Config("Anchor symbol cannot be empty".to_string()));
        }

        if self.primary.is_empty() {
            return Err(AppError::Config(
                "Primary symbol list cannot be empty".to_string(),
            ));
        }

        if !self.primary.contains(&self.anchor) {
            return Err(AppError::Config(format!(
                "Anchor symbol {} must be part of the primary list",
                self.anchor
            )));
        }

        let mut primary = HashSet::new();
        for symbol in &self.primary {
            if !primary.insert(symbol.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate symbol {} in primary list",
                    symbol
                )));
            }
        }

        let mut secondary = HashSet::new();
        for symbol in &self.secondary {
            if !secondary.insert(symbol.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate symbol {} in secondary list",
                    symbol
                )));
            }
            if primary.contains(symbol.as_str()) {
                return Err(AppError::Config(format!(
                    "Symbol {} cannot be in both primary and secondary lists",
                    symbol
                )));
            }
        }

        Ok(())
    }
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Upstream feed settings
    pub feed: FeedConfig,
    /// Grid / strip symbol membership
    pub symbols: SymbolConfig,
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<()> {
        self.feed.validate()?;
        self.symbols.validate()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
