//! Core module - formatting, classification, ranking, snapshot, polling, logging
//!
//! This module uses **explicit re-exports** instead of glob exports (`pub use module::*`)
//! so the public surface only changes on purpose.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use crate::core::{TickerPoller, SymbolUniverse, Snapshot};
//! ```

pub mod device;
pub mod format;
pub mod logging;
pub mod normalize;
pub mod poller;
pub mod ranking;
pub mod snapshot;
pub mod symbols;

// Explicit re-exports for format module
pub use format::{
    format_change, format_clock, format_price, format_price_grouped, format_volume,
    parse_decimal, CHANGE_PLACEHOLDER, PRICE_PLACEHOLDER, VOLUME_PLACEHOLDER,
};

// Explicit re-exports for symbols module
pub use symbols::{base_asset, display_name, trading_pair, Partition, Section, SymbolUniverse, QUOTE_ASSET};

// Explicit re-exports for ranking module
pub use ranking::{rank_primary, rank_secondary};

// Explicit re-exports for normalize module
pub use normalize::{normalize, DisplayRecord, Trend};

// Explicit re-exports for snapshot module
pub use snapshot::{build_board, PollStatus, Snapshot, SnapshotStore};

// Explicit re-exports for poller module
pub use poller::{CycleOutcome, PollerHandle, TickerPoller};

// Explicit re-exports for device module
pub use device::DeviceClass;

// Explicit re-exports for logging module
pub use logging::{
    init_logging, init_logging_with_config, init_test_logging, LogFormat, LoggingConfig,
    DEFAULT_LOG_LEVEL,
};
