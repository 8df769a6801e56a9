//! Logging setup for crypto_wall
//!
//! Structured logging through `tracing`:
//! - JSON lines by default, for log shippers
//! - Human-readable output with `LOG_FORMAT=pretty`
//! - Level filter from `RUST_LOG`
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RUST_LOG` | `crypto_wall=info` | Log level filter (standard tracing format) |
//! | `LOG_FORMAT` | `json` | Output format: `json` or `pretty` |
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crypto_wall::core::logging::init_logging;
//!
//! init_logging();
//! tracing::info!(symbols = 30, "Dashboard starting");
//! ```

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt as ts_fmt, prelude::*, EnvFilter};

/// Set once the global subscriber is installed
static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_LEVEL: &str = "crypto_wall=info";

/// Output encoding of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// `pretty` (any case) selects pretty output, anything else is JSON
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter string (e.g., "crypto_wall=debug,crypto_wall::feed=trace")
    pub level_filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level_filter: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        let level_filter = env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let format = env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self {
            level_filter,
            format,
        }
    }
}

/// Install the global subscriber from environment settings
///
/// Calling it more than once is a no-op.
pub fn init_logging() {
    init_logging_with_config(LoggingConfig::from_env());
}

/// Install the global subscriber with an explicit configuration
pub fn init_logging_with_config(config: LoggingConfig) {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env_filter = EnvFilter::try_new(&config.level_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(
                    ts_fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(false)
                        .with_line_number(false),
                )
                .with(env_filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(
                    ts_fmt::layer()
                        .json()
                        .with_target(true)
                        .with_current_span(true),
                )
                .with(env_filter)
                .init();
        }
    }
}

/// Test subscriber writing through the test harness capture
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Unit Tests
// ============================================================================
