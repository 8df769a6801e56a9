//! Published board state
//!
//! A single `Snapshot` value lives inside a `watch` channel. Every update is
//! one `send_if_modified` call, so subscribers never see a half-applied
//! cycle. Each poll cycle carries a sequence number issued at request time;
//! a completed cycle is only applied when its number is higher than the
//! last applied one, which discards responses that arrive out of order.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::core::normalize::{normalize, DisplayRecord};
use crate::core::ranking::{rank_primary, rank_secondary};
use crate::core::symbols::SymbolUniverse;
use crate::feed::RawTicker;

// =============================================================================
// Snapshot
// =============================================================================

/// Phase of the poll pipeline
///
/// `Loading` while any cycle newer than the applied one is still in
/// flight; `Ready` / `Failed` describe the last applied cycle once nothing
/// newer is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PollStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Board state as seen by consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub primary: Vec<DisplayRecord>,
    pub secondary: Vec<DisplayRecord>,
    pub status: PollStatus,
    /// True until the first cycle completes, either way
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub last_update: DateTime<Utc>,
    /// Sequence number of the last applied cycle (0 = none yet)
    pub applied_sequence: u64,
}

impl Snapshot {
    pub fn initial() -> Self {
        Self {
            primary: Vec::new(),
            secondary: Vec::new(),
            status: PollStatus::Loading,
            is_loading: true,
            last_error: None,
            last_update: Utc::now(),
            applied_sequence: 0,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.primary.is_empty() || !self.secondary.is_empty()
    }

    /// Status bar label, offline while an error is set
    pub fn connection_label(&self) -> &'static str {
        if self.last_error.is_some() {
            "OFFLINE"
        } else {
            "LIVE"
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

// =============================================================================
// Board pipeline
// =============================================================================

/// Classify, rank and normalize one raw batch
///
/// Synchronous and deterministic: the same batch always yields the same
/// rows in the same order.
pub fn build_board(
    raw: Vec<RawTicker>,
    universe: &SymbolUniverse,
) -> (Vec<DisplayRecord>, Vec<DisplayRecord>) {
    let anchor = universe.anchor();
    let partition = universe.classify(raw);

    let primary = rank_primary(partition.primary, anchor)
        .into_iter()
        .map(|record| normalize(record, anchor))
        .collect();
    let secondary = rank_secondary(partition.secondary)
        .into_iter()
        .map(|record| normalize(record, anchor))
        .collect();

    (primary, secondary)
}

// =============================================================================
// Store
// =============================================================================

/// Owner of the published snapshot and the cycle sequence counter
#[derive(Debug)]
pub struct SnapshotStore {
    tx: watch::Sender<Snapshot>,
    issued: AtomicU64,
    /// Sequences begun but not yet settled
    in_flight: Mutex<BTreeSet<u64>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot::initial());
        Self {
            tx,
            issued: AtomicU64::new(0),
            in_flight: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Reserve the sequence number for a new cycle (starts at 1)
    pub fn next_sequence(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Lock order: watch value first, then `in_flight`
    fn pending(&self) -> MutexGuard<'_, BTreeSet<u64>> {
        self.in_flight.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mark a cycle as in flight
    pub fn begin(&self, sequence: u64) {
        self.tx.send_if_modified(|snapshot| {
            if sequence <= snapshot.applied_sequence {
                return false;
            }
            self.pending().insert(sequence);
            if snapshot.status == PollStatus::Loading {
                return false;
            }
            snapshot.status = PollStatus::Loading;
            true
        });
    }

    /// Poller stopped; lists and error stay as they were
    pub fn mark_idle(&self) {
        self.tx.send_if_modified(|snapshot| {
            self.pending().clear();
            if snapshot.status == PollStatus::Idle {
                return false;
            }
            snapshot.status = PollStatus::Idle;
            true
        });
    }

    /// Settle `sequence`; `None` when it was superseded, otherwise whether
    /// a newer cycle is still running
    fn settle(&self, sequence: u64, applied: u64) -> Option<bool> {
        let mut pending = self.pending();
        pending.remove(&sequence);
        if sequence <= applied {
            return None;
        }
        pending.retain(|&other| other > sequence);
        Some(!pending.is_empty())
    }

    /// Replace both lists, stamp the time and clear the error
    ///
    /// Returns `false` when the cycle was superseded and nothing changed.
    pub fn apply_success(
        &self,
        sequence: u64,
        primary: Vec<DisplayRecord>,
        secondary: Vec<DisplayRecord>,
    ) -> bool {
        self.tx.send_if_modified(|snapshot| {
            let Some(newer_pending) = self.settle(sequence, snapshot.applied_sequence) else {
                debug!(sequence, applied = snapshot.applied_sequence, "Discarding stale poll result");
                return false;
            };
            snapshot.primary = primary;
            snapshot.secondary = secondary;
            snapshot.status = if newer_pending { PollStatus::Loading } else { PollStatus::Ready };
            snapshot.is_loading = false;
            snapshot.last_error = None;
            snapshot.last_update = Utc::now();
            snapshot.applied_sequence = sequence;
            true
        })
    }

    /// Record a failed cycle, keeping the previous lists on display
    pub fn apply_failure(&self, sequence: u64, message: impl Into<String>) -> bool {
        let message = message.into();
        self.tx.send_if_modified(|snapshot| {
            let Some(newer_pending) = self.settle(sequence, snapshot.applied_sequence) else {
                debug!(sequence, applied = snapshot.applied_sequence, "Discarding stale poll failure");
                return false;
            };
            snapshot.status = if newer_pending { PollStatus::Loading } else { PollStatus::Failed };
            snapshot.is_loading = false;
            snapshot.last_error = Some(message);
            snapshot.applied_sequence = sequence;
            true
        })
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
