//! Order book synthesis and analysis
//!
//! Turns a best bid/ask quote into a trading signal in three stages:
//! - Synthesizer: quote → multi-level book (0.1% steps, randomized decaying volume)
//! - Metrics: book → totals, imbalance ratio, weighted prices, top-5 depth, pressure
//! - Signal: imbalance and depth ratios → STRONG BUY / BUY / HOLD / SELL / STRONG SELL
//!
//! The stages are pure apart from the injected liquidity sampler. The batch
//! driver sequences them over a ticker list behind a client-side rate limiter.

pub mod analyzer;
pub mod batch;
pub mod features;
pub mod metrics;
pub mod rate_limiter;
pub mod rounding;
pub mod signal;
pub mod synth;
pub mod types;

pub use analyzer::{OrderBookAnalyzer, OrderBookReport};
pub use batch::{analyze_batch, BatchFailure, BatchOutcome};
pub use features::extract_features;
pub use metrics::{analyze, BookAnalysis, Pressure, Severity};
pub use rate_limiter::RateLimiter;
pub use signal::{generate_signal, MarketSignal, SignalKind};
pub use synth::{
    BookSource, BookSynthesizer, FixedSampler, LiquiditySampler, RandomSampler,
};
pub use types::{Book, PriceLevel, Side};
