//! Synthetic order book construction
//!
//! Expands a single best bid/ask quote into a multi-level ladder:
//! - prices step 0.1% away from the best quote per level
//! - volume decays harmonically with distance and is scaled by a random
//!   liquidity multiplier in [0.5, 2.0)
//! - every level carries at least 100 shares
//!
//! The ladder is a stand-in for real Level-2 data. Anything implementing
//! [`BookSource`] can replace it.

use crate::orderbook::types::{Book, PriceLevel, Side};
use crate::quotes::Quote;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Relative price step between adjacent levels (0.1%)
pub const PRICE_STEP: f64 = 0.001;

/// Floor on synthesized level size (shares)
pub const MIN_LEVEL_QUANTITY: u64 = 100;

/// Lower bound of the liquidity multiplier draw
pub const LIQUIDITY_MIN: f64 = 0.5;

/// Upper bound (exclusive) of the liquidity multiplier draw
pub const LIQUIDITY_MAX: f64 = 2.0;

/// Source of the per-level liquidity multiplier
pub trait LiquiditySampler {
    /// Next multiplier, expected in `[LIQUIDITY_MIN, LIQUIDITY_MAX)`
    fn sample(&mut self) -> f64;
}

/// Uniform draws from a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Generator seeded from OS entropy (production)
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LiquiditySampler for RandomSampler<R> {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(LIQUIDITY_MIN..LIQUIDITY_MAX)
    }
}

/// Replays a fixed sequence of multipliers, wrapping around at the end
#[derive(Debug, Clone)]
pub struct FixedSampler {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSampler {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl LiquiditySampler for FixedSampler {
    fn sample(&mut self) -> f64 {
        if self.values.is_empty() {
            return LIQUIDITY_MIN;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Produces a leveled book from a quote
///
/// Implemented by the synthesizer today; a real Level-2 feed would implement
/// the same contract.
pub trait BookSource {
    fn build_book(&mut self, quote: &Quote, depth: usize) -> Book;
}

/// Synthetic book generator around a best bid/ask quote
#[derive(Debug, Clone)]
pub struct BookSynthesizer<S: LiquiditySampler> {
    sampler: S,
}

impl BookSynthesizer<RandomSampler<StdRng>> {
    /// Synthesizer backed by an entropy-seeded generator
    pub fn from_entropy() -> Self {
        Self::new(RandomSampler::from_entropy())
    }

    /// Synthesizer with a reproducible draw sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomSampler::seeded(seed))
    }
}

impl<S: LiquiditySampler> BookSynthesizer<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    /// Build `depth` levels per side around the quote
    ///
    /// All bid levels are drawn before all ask levels. `depth == 0` yields an
    /// empty book.
    pub fn synthesize(&mut self, quote: &Quote, depth: usize) -> Book {
        let bids = self.build_side(Side::Bid, quote.bid_price, quote.bid_size, depth);
        let asks = self.build_side(Side::Ask, quote.ask_price, quote.ask_size, depth);

        debug!(
            depth,
            best_bid = quote.bid_price,
            best_ask = quote.ask_price,
            "Synthesized order book"
        );

        Book::new(bids, asks)
    }

    fn build_side(
        &mut self,
        side: Side,
        base_price: f64,
        base_size: u64,
        depth: usize,
    ) -> Vec<PriceLevel> {
        (0..depth)
            .map(|i| {
                let offset = i as f64 * PRICE_STEP;
                let price = match side {
                    Side::Bid => base_price * (1.0 - offset),
                    Side::Ask => base_price * (1.0 + offset),
                };

                let multiplier = self.sampler.sample();
                let raw_volume = base_size as f64 * (1.0 + multiplier) * (1.0 / (i as f64 + 1.0));
                let quantity = (raw_volume.floor() as u64).max(MIN_LEVEL_QUANTITY);

                PriceLevel::new(price, quantity, i as u32 + 1)
            })
            .collect()
    }
}

impl<S: LiquiditySampler> BookSource for BookSynthesizer<S> {
    fn build_book(&mut self, quote: &Quote, depth: usize) -> Book {
        self.synthesize(quote, depth)
    }
}
