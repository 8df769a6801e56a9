//! Binance 24h ticker REST client
//!
//! One GET against `/api/v3/ticker/24hr` without a symbol filter returns
//! statistics for every listed instrument. The poller calls this once per
//! cycle.
//!
//! # Failure mapping
//! - transport error → `FeedError::Request`
//! - no answer within the timeout → `FeedError::Timeout`
//! - non-2xx status → `FeedError::HttpStatus`
//! - unreadable or non-array body → `FeedError::InvalidResponse`
//!
//! Individual bad entries inside an array are skipped, not fatal.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::feed::errors::{FeedError, FeedResult};
use crate::feed::traits::TickerSource;
use crate::feed::types::{decode_ticker_batch, RawTicker};

/// Public 24h ticker endpoint
pub const BINANCE_TICKER_24H_URL: &str = "https://api.binance.com/api/v3/ticker/24hr";

/// Longest body excerpt carried in a parse error
const BODY_EXCERPT_CHARS: usize = 120;

/// REST ticker source backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct BinanceTickerSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl BinanceTickerSource {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Build a source from the feed section of the app config
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(
            reqwest::Client::new(),
            config.endpoint.clone(),
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_transport_error(&self, err: reqwest::Error) -> FeedError {
        if err.is_timeout() {
            FeedError::Timeout(self.timeout.as_millis() as u64)
        } else {
            FeedError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl TickerSource for BinanceTickerSource {
    async fn fetch_tickers(&self) -> FeedResult<Vec<RawTicker>> {
        let started = Instant::now();

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout(self.timeout.as_millis() as u64)
            } else {
                FeedError::InvalidResponse(format!("failed to read body: {}", e))
            }
        })?;

        let (tickers, skipped) = decode_ticker_batch(&body).map_err(|e| {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            FeedError::InvalidResponse(format!("{} - body: {}", e, excerpt))
        })?;
        if skipped > 0 {
            warn!(
                source = self.source_name(),
                skipped,
                "Skipped ticker entries without a usable symbol"
            );
        }

        debug!(
            source = self.source_name(),
            tickers = tickers.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Ticker batch fetched"
        );

        Ok(tickers)
    }

    fn source_name(&self) -> &'static str {
        "binance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKER_PATH: &str = "/api/v3/ticker/24hr";

    fn source_for(server: &mockito::Server) -> BinanceTickerSource {
        BinanceTickerSource::new(
            reqwest::Client::new(),
            format!("{}{}", server.url(), TICKER_PATH),
            Duration::from_secs(2),
        )
    }

    #[tokio::test]
    async fn test_fetch_tickers_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", TICKER_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"symbol":"BTCUSDT","lastPrice":"65000.5","priceChangePercent":"1.2","volume":"5000","highPrice":"66000","lowPrice":"64000"},
                    {"symbol":"ETHUSDT","lastPrice":"3500.25","priceChangePercent":"-0.4","volume":"9000","highPrice":"3600","lowPrice":"3400"}
                ]"#,
            )
            .create_async()
            .await;

        let tickers = source_for(&server).fetch_tickers().await.unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].symbol, "BTCUSDT");
        assert_eq!(tickers[1].volume, "9000");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tickers_http_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", TICKER_PATH)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let result = source_for(&server).fetch_tickers().await;
        assert_eq!(result, Err(FeedError::HttpStatus(503)));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tickers_tolerates_bad_entries() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", TICKER_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"symbol":"BTCUSDT","lastPrice":"65000.5","priceChangePercent":"1.2","volume":"5000"},
                    {"symbol":"ETHUSDT","lastPrice":null,"priceChangePercent":"-0.4","volume":9000},
                    {"lastPrice":"1.0","volume":"1"}
                ]"#,
            )
            .create_async()
            .await;

        let tickers = source_for(&server).fetch_tickers().await.unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[1].symbol, "ETHUSDT");
        assert_eq!(tickers[1].last_price, "");
        assert_eq!(tickers[1].volume, "9000");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tickers_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", TICKER_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":-1003,"msg":"Too many requests"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_tickers().await;
        match result {
            Err(FeedError::InvalidResponse(msg)) => {
                assert!(msg.contains("Too many requests"), "Got: {}", msg);
            }
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_tickers_connection_refused() {
        // Port 1 is never bound in the test environment
        let source = BinanceTickerSource::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/api/v3/ticker/24hr",
            Duration::from_secs(2),
        );

        let result = source.fetch_tickers().await;
        assert!(
            matches!(result, Err(FeedError::Request(_)) | Err(FeedError::Timeout(_))),
            "Got: {:?}",
            result
        );
    }

    #[test]
    fn test_from_config_uses_endpoint_and_timeout() {
        let config = FeedConfig::default();
        let source = BinanceTickerSource::from_config(&config);
        assert_eq!(source.endpoint(), config.endpoint);
        assert_eq!(source.timeout(), config.request_timeout());
    }
}
