//! Crypto Wall - Entry Point
//!
//! 1. Loads `.env` and configuration (`config.yaml`, defaults if absent)
//! 2. Starts the ticker poller
//! 3. Logs a board summary for every published snapshot
//! 4. Shuts down on Ctrl+C

use std::path::Path;

use anyhow::Context;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crypto_wall::config::{self, constants};
use crypto_wall::core::{
    format_clock, init_logging, trading_pair, Snapshot, SymbolUniverse, TickerPoller,
};
use crypto_wall::feed::BinanceTickerSource;

const CONFIG_PATH: &str = "config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();
    init_logging();

    info!("Crypto Wall starting...");

    let config = config::load_config_or_default(Path::new(CONFIG_PATH))
        .context("Configuration failed")?;
    constants::log_configuration();
    info!(
        anchor = %config.symbols.anchor,
        primary = config.symbols.primary.len(),
        secondary = config.symbols.secondary.len(),
        "[CONFIG] Symbol universe loaded"
    );

    let source = BinanceTickerSource::from_config(&config.feed);
    let universe = SymbolUniverse::from_config(&config.symbols);
    let handle = TickerPoller::new(source, universe).spawn(config.feed.poll_interval());

    let board_task = tokio::spawn(log_board(handle.subscribe(), constants::snapshot_log_rows()));

    match signal::ctrl_c().await {
        Ok(()) => info!("[SHUTDOWN] Graceful shutdown initiated"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C signal"),
    }

    handle.shutdown().await;
    board_task.abort();

    info!("[SHUTDOWN] Clean exit");
    Ok(())
}

/// Log one summary per published snapshot until the poller goes away
async fn log_board(mut rx: watch::Receiver<Snapshot>, rows: usize) {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        log_snapshot(&snapshot, rows);
    }
}

fn log_snapshot(snapshot: &Snapshot, rows: usize) {
    if let Some(err) = &snapshot.last_error {
        warn!(
            status = ?snapshot.status,
            connection = snapshot.connection_label(),
            error = %err,
            "[BOARD] Feed error, showing last known prices"
        );
    }
    if !snapshot.has_data() {
        return;
    }

    info!(
        status = ?snapshot.status,
        connection = snapshot.connection_label(),
        updated = %format_clock(&snapshot.last_update),
        primary = snapshot.primary.len(),
        secondary = snapshot.secondary.len(),
        "[BOARD] Snapshot"
    );
    for record in snapshot.primary.iter().take(rows) {
        info!(
            pair = %trading_pair(&record.symbol),
            price = %record.price,
            change = %record.change_display(),
            volume = %record.volume_display(),
            high = %record.high_display(),
            low = %record.low_display(),
            trend = ?record.trend(),
            "[BOARD] Grid"
        );
    }
    for record in snapshot.secondary.iter().take(rows) {
        info!(
            symbol = record.base_asset(),
            price = %record.price,
            change = %record.change_display(),
            "[BOARD] Ticker"
        );
    }
}
