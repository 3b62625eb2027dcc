//! Per-ticker order book analysis
//!
//! Runs Quote → Book → Analysis (→ Signal) for one instrument and packages the
//! result in the consumer-facing [`OrderBookReport`] shape.

use crate::error::Result;
use crate::orderbook::metrics::{self, BookAnalysis};
use crate::orderbook::rounding::round_dp;
use crate::orderbook::signal::{self, MarketSignal};
use crate::orderbook::synth::BookSource;
use crate::orderbook::types::PriceLevel;
use crate::quotes::{Quote, QuoteSource};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, info};

/// Full analysis result for one ticker at one instant
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct OrderBookReport {
    /// Instrument symbol (uppercased)
    pub ticker: String,

    /// Time the report was built (ISO-8601, UTC)
    pub timestamp: DateTime<Utc>,

    /// Last trade price from the quote
    pub current_price: f64,

    /// ask - bid (4 decimals)
    pub spread: f64,

    /// Spread as a percentage of the current price (4 decimals)
    pub spread_pct: f64,

    /// Bid ladder, best first
    pub bids: Vec<PriceLevel>,

    /// Ask ladder, best first
    pub asks: Vec<PriceLevel>,

    /// Depth and imbalance statistics
    pub analysis: BookAnalysis,

    /// Trading signal, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<MarketSignal>,
}

/// Quote-to-signal pipeline for single tickers
///
/// Generic over where quotes come from and how books are produced, so both the
/// upstream provider and the synthetic ladder can be swapped out.
pub struct OrderBookAnalyzer<Q: QuoteSource, B: BookSource> {
    quotes: Q,
    books: B,
}

impl<Q: QuoteSource, B: BookSource> OrderBookAnalyzer<Q, B> {
    pub fn new(quotes: Q, books: B) -> Self {
        Self { quotes, books }
    }

    /// Build the report for an already fetched quote (no signal attached)
    pub fn build_report(&mut self, ticker: &str, quote: &Quote, depth: usize) -> OrderBookReport {
        let book = self.books.build_book(quote, depth);
        let analysis = metrics::analyze(&book);

        debug!(
            ticker,
            depth,
            imbalance_ratio = analysis.imbalance_ratio,
            depth_ratio = analysis.depth_ratio,
            pressure = %analysis.pressure,
            "Analyzed order book"
        );

        let (bids, asks) = book.into_sides();
        OrderBookReport {
            ticker: ticker.to_uppercase(),
            timestamp: Utc::now(),
            current_price: quote.current_price,
            spread: round_dp(quote.spread(), 4),
            spread_pct: round_dp(quote.spread_pct(), 4),
            bids,
            asks,
            analysis,
            signal: None,
        }
    }

    /// Fetch the quote for `ticker` and build its report (no signal attached)
    ///
    /// # Errors
    /// Returns the quote source failure; incomplete quotes are defaulted, not rejected.
    pub async fn get_order_book(&mut self, ticker: &str, depth: usize) -> Result<OrderBookReport> {
        let ticker = ticker.to_uppercase();
        info!(ticker = %ticker, depth, "Fetching quote");

        let quote = self.quotes.fetch_quote(&ticker).await?;
        Ok(self.build_report(&ticker, &quote, depth))
    }

    /// Fetch, analyze and attach the trading signal
    pub async fn analyze_ticker(&mut self, ticker: &str, depth: usize) -> Result<OrderBookReport> {
        let mut report = self.get_order_book(ticker, depth).await?;
        report.signal = Some(signal::generate_signal(&report.analysis));
        Ok(report)
    }
}
