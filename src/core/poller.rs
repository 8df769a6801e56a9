//! Fixed-interval ticker polling
//!
//! # Architecture
//! - `TickerPoller::poll_once`: one fetch → board → publish cycle
//! - `TickerPoller::spawn`: background timer task, first tick immediate
//! - `PollerHandle::refetch`: manual cycle, independent of the timer
//!
//! Timer and manual cycles may overlap. Each cycle takes a sequence number
//! before the request goes out and `SnapshotStore` drops any result older
//! than the one already applied. A failed cycle never stops the timer; the
//! next tick simply tries again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::snapshot::{build_board, Snapshot, SnapshotStore};
use crate::core::symbols::SymbolUniverse;
use crate::feed::TickerSource;

/// Outcome of a single cycle as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetched and published
    Applied,
    /// Fetch failed, error published, lists kept
    Failed,
    /// A newer cycle had already been applied
    Superseded,
}

/// Poll pipeline over one ticker source
pub struct TickerPoller<S> {
    source: Arc<S>,
    universe: Arc<SymbolUniverse>,
    store: Arc<SnapshotStore>,
}

impl<S> Clone for TickerPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            universe: Arc::clone(&self.universe),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: TickerSource + 'static> TickerPoller<S> {
    pub fn new(source: S, universe: SymbolUniverse) -> Self {
        Self {
            source: Arc::new(source),
            universe: Arc::new(universe),
            store: Arc::new(SnapshotStore::new()),
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.store.subscribe()
    }

    /// Run one cycle: issue a sequence number, fetch, publish
    pub async fn poll_once(&self) -> CycleOutcome {
        let sequence = self.store.next_sequence();
        self.store.begin(sequence);

        match self.source.fetch_tickers().await {
            Ok(raw) => {
                let fetched = raw.len();
                let (primary, secondary) = build_board(raw, &self.universe);
                let (primary_len, secondary_len) = (primary.len(), secondary.len());
                if self.store.apply_success(sequence, primary, secondary) {
                    debug!(
                        source = self.source.source_name(),
                        sequence,
                        fetched,
                        primary = primary_len,
                        secondary = secondary_len,
                        "Ticker snapshot published"
                    );
                    CycleOutcome::Applied
                } else {
                    CycleOutcome::Superseded
                }
            }
            Err(e) => {
                warn!(
                    source = self.source.source_name(),
                    sequence,
                    error = %e,
                    "Ticker poll failed, keeping previous snapshot"
                );
                if self.store.apply_failure(sequence, e.to_string()) {
                    CycleOutcome::Failed
                } else {
                    CycleOutcome::Superseded
                }
            }
        }
    }

    /// Start the timer task
    ///
    /// The first cycle runs immediately, then every `period`. A cycle that
    /// overruns the period delays the next tick instead of bursting.
    pub fn spawn(self, period: Duration) -> PollerHandle<S> {
        let token = CancellationToken::new();
        let poller = self.clone();
        let task_token = token.clone();

        let task = tokio::spawn(async move {
            info!(
                source = poller.source.source_name(),
                period_secs = period.as_secs_f64(),
                "Ticker poller started"
            );
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = task_token.cancelled() => break,
                    _ = ticker.tick() => {
                        tokio::select! {
                            biased;
                            _ = task_token.cancelled() => break,
                            _ = poller.poll_once() => {}
                        }
                    }
                }
            }
            info!("Ticker poller stopped");
        });

        PollerHandle {
            poller: self,
            token,
            task: Some(task),
        }
    }
}

/// Control surface of a running poller
///
/// Dropping the handle cancels the timer and any in-flight cycle.
pub struct PollerHandle<S> {
    poller: TickerPoller<S>,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl<S: TickerSource + 'static> PollerHandle<S> {
    /// Start a cycle now without touching the timer schedule
    pub fn refetch(&self) -> JoinHandle<Option<CycleOutcome>> {
        let poller = self.poller.clone();
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => None,
                outcome = poller.poll_once() => Some(outcome),
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.poller.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.poller.store.current()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Cancel everything and wait for the timer task to exit
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Ticker poller task ended abnormally");
            }
        }
        self.poller.store.mark_idle();
    }
}

impl<S> Drop for PollerHandle<S> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
