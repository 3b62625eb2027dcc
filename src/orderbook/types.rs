//! Order book data structures and types
//!
//! Price ladders produced by a [`BookSource`](crate::orderbook::synth::BookSource)
//! and consumed by the metrics and signal stages.

use crate::orderbook::rounding::round_dp;
use schemars::JsonSchema;
use serde::Serialize;

/// Side of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy orders, prices step down from the best bid
    Bid,

    /// Sell orders, prices step up from the best ask
    Ask,
}

/// One resting price level
///
/// `value` is always `round(price * quantity, 2)`; the constructor is the only
/// way to build a level, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct PriceLevel {
    /// Limit price of the level
    price: f64,

    /// Shares resting at this price
    quantity: u64,

    /// Notional value (price × quantity, 2 decimals)
    value: f64,

    /// 1-based distance from the best price
    level: u32,
}

impl PriceLevel {
    pub fn new(price: f64, quantity: u64, level: u32) -> Self {
        Self {
            price,
            quantity,
            value: round_dp(price * quantity as f64, 2),
            level,
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

/// Bid/ask ladder for one instrument at one instant
///
/// Bids are ordered best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct Book {
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl Book {
    /// Build a book from ladders already ordered best-first
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    pub fn levels(&self, side: Side) -> &[PriceLevel] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// Best `n` levels of one side (fewer if the side is shallower)
    pub fn top(&self, side: Side, n: usize) -> &[PriceLevel] {
        let levels = self.levels(side);
        &levels[..n.min(levels.len())]
    }

    /// Get best bid level (highest price)
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    /// Get best ask level (lowest price)
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Consume the book, yielding `(bids, asks)`
    pub fn into_sides(self) -> (Vec<PriceLevel>, Vec<PriceLevel>) {
        (self.bids, self.asks)
    }
}
