//! Ticker source trait definition
//!
//! The poller only knows about `TickerSource`; the HTTP client and the
//! test doubles both implement it.

use async_trait::async_trait;

use crate::feed::errors::FeedResult;
use crate::feed::types::RawTicker;

/// Anything that can produce one full batch of 24h tickers
///
/// # Example Implementation
///
/// ```ignore
/// use async_trait::async_trait;
///
/// struct FixedSource(Vec<RawTicker>);
///
/// #[async_trait]
/// impl TickerSource for FixedSource {
///     async fn fetch_tickers(&self) -> FeedResult<Vec<RawTicker>> {
///         Ok(self.0.clone())
///     }
///     fn source_name(&self) -> &'static str { "fixed" }
/// }
/// ```
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Fetch the full ticker universe in one request
    ///
    /// A non-2xx status, a timeout or a malformed body is an error; an
    /// individual record with unparsable numbers is not.
    async fn fetch_tickers(&self) -> FeedResult<Vec<RawTicker>>;

    /// Short name used in log fields
    fn source_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::errors::FeedError;
    use crate::feed::test_utils::TestTickerSource;

    #[tokio::test]
    async fn test_mock_source_returns_batch() {
        let source = TestTickerSource::new(vec![RawTicker::new("BTCUSDT", "1", "0", "1")]);
        let batch = source.fetch_tickers().await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_source_failure() {
        let source = TestTickerSource::failing(FeedError::HttpStatus(500));
        let result = source.fetch_tickers().await;
        assert_eq!(result, Err(FeedError::HttpStatus(500)));
    }

    #[test]
    fn test_mock_source_name() {
        let source = TestTickerSource::new(Vec::new());
        assert_eq!(source.source_name(), "mock");
    }
}
