//! Quote Type Definitions
//!
//! The normalized [`Quote`] consumed by the book synthesizer, plus the raw
//! payload returned by the upstream quote endpoint.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fallback bid when the provider omits one: 0.1% under the last price
const DEFAULT_BID_FACTOR: f64 = 0.999;

/// Fallback ask when the provider omits one: 0.1% over the last price
const DEFAULT_ASK_FACTOR: f64 = 1.001;

/// Best bid/ask snapshot for one instrument
///
/// All prices and sizes are non-negative. Built once per analysis call and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    /// Last trade price
    pub current_price: f64,

    /// Best bid price
    pub bid_price: f64,

    /// Best ask price
    pub ask_price: f64,

    /// Shares at the best bid
    pub bid_size: u64,

    /// Shares at the best ask
    pub ask_size: u64,
}

impl Quote {
    /// Build a quote from possibly incomplete provider fields
    ///
    /// - missing current price → 0
    /// - missing (or non-positive) bid → `current_price * 0.999`
    /// - missing (or non-positive) ask → `current_price * 1.001`
    /// - missing sizes → 0
    ///
    /// A bid or ask that is present but zero, negative or non-finite gets the
    /// same default as an absent one: `Some(0.0)` is never passed through.
    pub fn from_parts(
        current_price: Option<f64>,
        bid_price: Option<f64>,
        ask_price: Option<f64>,
        bid_size: Option<u64>,
        ask_size: Option<u64>,
    ) -> Self {
        let current_price = current_price.filter(|p| p.is_finite()).unwrap_or(0.0).max(0.0);

        let bid_price = bid_price
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(current_price * DEFAULT_BID_FACTOR);
        let ask_price = ask_price
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(current_price * DEFAULT_ASK_FACTOR);

        Self {
            current_price,
            bid_price,
            ask_price,
            bid_size: bid_size.unwrap_or(0),
            ask_size: ask_size.unwrap_or(0),
        }
    }

    /// Absolute spread (ask - bid)
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }

    /// Spread as a percentage of the current price, 0 when the price is 0
    pub fn spread_pct(&self) -> f64 {
        if self.current_price > 0.0 {
            self.spread() / self.current_price * 100.0
        } else {
            0.0
        }
    }
}

/// Envelope of the `/v7/finance/quote` endpoint
///
/// # Example Response
/// ```json
/// {
///   "quoteResponse": {
///     "result": [
///       {"symbol": "AAPL", "regularMarketPrice": 189.5, "bid": 189.48,
///        "ask": 189.52, "bidSize": 3, "askSize": 4}
///     ],
///     "error": null
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEnvelope {
    pub quote_response: QuoteResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub result: Vec<RawQuote>,

    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// One instrument entry as sent by the provider; every field may be absent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub regular_market_price: Option<f64>,

    #[serde(default)]
    pub bid: Option<f64>,

    #[serde(default)]
    pub ask: Option<f64>,

    #[serde(default)]
    pub bid_size: Option<u64>,

    #[serde(default)]
    pub ask_size: Option<u64>,
}

impl From<RawQuote> for Quote {
    fn from(raw: RawQuote) -> Self {
        Quote::from_parts(
            raw.current_price.or(raw.regular_market_price),
            raw.bid,
            raw.ask,
            raw.bid_size,
            raw.ask_size,
        )
    }
}
