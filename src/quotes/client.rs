//! Quote HTTP Client
//!
//! HTTP client wrapper for the upstream quote endpoint.
//! Provides timeout configuration, user-agent headers and 429 backoff.

use crate::error::QuoteError;
use crate::quotes::types::{Quote, QuoteEnvelope};
use crate::quotes::QuoteSource;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Default upstream (Yahoo Finance compatible quote API)
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str = "orderflow-provider/0.1.0";

/// Retries for HTTP 429 before giving up
const MAX_RETRIES: u32 = 3;

/// Quote REST API HTTP client
///
/// Wraps reqwest::Client with the base URL and request timeout.
#[derive(Clone, Debug)]
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl QuoteClient {
    /// Creates a client for `base_url` with the given request timeout
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use orderflow_provider::quotes::QuoteClient;
    ///
    /// let client = QuoteClient::new("http://127.0.0.1:9000/", Duration::from_secs(5)).unwrap();
    /// assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    /// ```
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QuoteError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current quote for a ticker
    ///
    /// Calls GET /v7/finance/quote?symbols={ticker}. HTTP 429 is retried up to
    /// 3 times, honouring `Retry-After` when present and otherwise backing off
    /// 1s, 2s, 4s.
    ///
    /// # Errors
    /// * `ConnectionError` - Network failures, timeouts, 5xx server errors
    /// * `RateLimitError` - HTTP 429 after max retries
    /// * `ParseError` - Invalid JSON response
    /// * `NotFound` - Provider returned no entry for the ticker
    pub async fn get_quote(&self, ticker: &str) -> Result<Quote, QuoteError> {
        let url = format!("{}/v7/finance/quote", self.base_url);
        let mut retry_count = 0;

        loop {
            let resp = self
                .client
                .get(&url)
                .query(&[("symbols", ticker)])
                .send()
                .await?;
            let status = resp.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if retry_count >= MAX_RETRIES {
                    return Err(QuoteError::RateLimitError(format!(
                        "Rate limit exceeded after {} retries. Wait 60 seconds before retrying.",
                        MAX_RETRIES
                    )));
                }

                let header_secs = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok());
                let retry_after = retry_delay(header_secs, retry_count);

                warn!(
                    ticker,
                    retry = retry_count + 1,
                    max_retries = MAX_RETRIES,
                    wait_secs = retry_after.as_secs(),
                    "Quote provider rate limit hit (429)"
                );

                tokio::time::sleep(retry_after).await;
                retry_count += 1;
                continue;
            }

            let resp = resp.error_for_status()?;
            let body = resp.text().await?;
            let envelope: QuoteEnvelope = serde_json::from_str(&body)?;

            let raw = envelope
                .quote_response
                .result
                .into_iter()
                .next()
                .ok_or_else(|| QuoteError::NotFound(ticker.to_string()))?;

            let quote = Quote::from(raw);
            debug!(
                ticker,
                current_price = quote.current_price,
                bid = quote.bid_price,
                ask = quote.ask_price,
                "Quote received"
            );
            return Ok(quote);
        }
    }
}

/// Wait before retry `retry_count` (0-based): `Retry-After` seconds when
/// given, otherwise 1s, 2s, 4s
fn retry_delay(retry_after_secs: Option<u64>, retry_count: u32) -> Duration {
    Duration::from_secs(retry_after_secs.unwrap_or_else(|| 2_u64.pow(retry_count)))
}

impl QuoteSource for QuoteClient {
    async fn fetch_quote(&self, ticker: &str) -> Result<Quote, QuoteError> {
        self.get_quote(ticker).await
    }
}
