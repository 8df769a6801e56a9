//! Shared test utilities for feed consumers
//!
//! `TestTickerSource` replays scripted responses in order and counts calls,
//! so poller tests never touch the network. Per-call delays let tests make
//! responses overlap and resolve out of order.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::feed::errors::{FeedError, FeedResult};
use crate::feed::traits::TickerSource;
use crate::feed::types::RawTicker;

/// Scripted ticker source
///
/// Responses are popped front to back; once the script runs dry the last
/// response is repeated.
pub struct TestTickerSource {
    script: Mutex<VecDeque<FeedResult<Vec<RawTicker>>>>,
    last: Mutex<FeedResult<Vec<RawTicker>>>,
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
}

impl TestTickerSource {
    /// Source that always answers with `batch`
    pub fn new(batch: Vec<RawTicker>) -> Self {
        Self::scripted(vec![Ok(batch)])
    }

    /// Source that always fails with `error`
    pub fn failing(error: FeedError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    /// Source that answers with each response in turn
    pub fn scripted(responses: Vec<FeedResult<Vec<RawTicker>>>) -> Self {
        let last = responses
            .last()
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()));
        Self {
            script: Mutex::new(responses.into()),
            last: Mutex::new(last),
            delays: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Delay the n-th call by the n-th duration (later calls answer at once)
    pub fn with_delays(self, delays: Vec<Duration>) -> Self {
        *self.delays.lock().unwrap() = delays.into();
        self
    }

    /// Number of `fetch_tickers` calls so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickerSource for TestTickerSource {
    async fn fetch_tickers(&self) -> FeedResult<Vec<RawTicker>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, next) = {
            let delay = self.delays.lock().unwrap().pop_front();
            (delay, self.script.lock().unwrap().pop_front())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match next {
            Some(response) => {
                *self.last.lock().unwrap() = response.clone();
                response
            }
            None => self.last.lock().unwrap().clone(),
        }
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
