//! Multi-ticker batch analysis
//!
//! Sequential, rate-limited sweep over a ticker list. A failing ticker is
//! logged and skipped; it never aborts the batch.

use crate::orderbook::analyzer::{OrderBookAnalyzer, OrderBookReport};
use crate::orderbook::rate_limiter::RateLimiter;
use crate::orderbook::synth::BookSource;
use crate::quotes::QuoteSource;
use serde::Serialize;
use tracing::{info, warn};

/// A ticker that could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub ticker: String,
    pub reason: String,
}

/// Result of a batch sweep
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchOutcome {
    /// Successful reports, in input order, each with its signal attached
    pub reports: Vec<OrderBookReport>,

    /// Tickers skipped because of an error
    pub failed: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Report for `ticker` (case-insensitive), if it succeeded
    pub fn get(&self, ticker: &str) -> Option<&OrderBookReport> {
        self.reports
            .iter()
            .find(|r| r.ticker.eq_ignore_ascii_case(ticker))
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Analyze every ticker in order, waiting on `limiter` before each quote fetch
pub async fn analyze_batch<Q, B, S>(
    analyzer: &mut OrderBookAnalyzer<Q, B>,
    tickers: &[S],
    depth: usize,
    limiter: &RateLimiter,
) -> BatchOutcome
where
    Q: QuoteSource,
    B: BookSource,
    S: AsRef<str>,
{
    let mut outcome = BatchOutcome::default();

    for ticker in tickers {
        let ticker = ticker.as_ref();

        let result = match limiter.wait().await {
            Ok(()) => analyzer.analyze_ticker(ticker, depth).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                warn!(
                    ticker,
                    error = %e,
                    error_type = e.error_type(),
                    retryable = e.is_retryable(),
                    "Skipping ticker"
                );
                outcome.failed.push(BatchFailure {
                    ticker: ticker.to_uppercase(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        requested = tickers.len(),
        succeeded = outcome.reports.len(),
        failed = outcome.failed.len(),
        "Batch analysis complete"
    );

    outcome
}
