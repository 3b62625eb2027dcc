//! Order book metrics calculations
//!
//! Aggregates a leveled book into depth and imbalance statistics:
//! - Total quantity and notional value per side
//! - Quantity/value imbalance and normalized imbalance ratio in [-1, 1]
//! - Volume-weighted average price per side
//! - Top-5 notional depth and bid/ask depth ratio
//! - Qualitative pressure label with a presentation severity tag

use crate::orderbook::rounding::round_dp;
use crate::orderbook::types::{Book, PriceLevel, Side};
use schemars::JsonSchema;
use serde::Serialize;

/// Number of best levels summed for depth metrics
const DEPTH_LEVELS: usize = 5;

/// Ratio above which buy (below its negative, sell) pressure is strong
const STRONG_PRESSURE_THRESHOLD: f64 = 0.20;

/// Ratio above which buy (below its negative, sell) pressure is moderate
const MODERATE_PRESSURE_THRESHOLD: f64 = 0.05;

/// Qualitative reading of the imbalance ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Pressure {
    #[serde(rename = "Strong Buy Pressure")]
    StrongBuy,
    #[serde(rename = "Moderate Buy Pressure")]
    ModerateBuy,
    #[serde(rename = "Balanced")]
    Balanced,
    #[serde(rename = "Moderate Sell Pressure")]
    ModerateSell,
    #[serde(rename = "Strong Sell Pressure")]
    StrongSell,
}

impl Pressure {
    /// Classify an imbalance ratio, first match wins:
    /// > 0.20 strong buy, > 0.05 moderate buy, < -0.20 strong sell,
    /// < -0.05 moderate sell, otherwise balanced
    pub fn from_imbalance_ratio(ratio: f64) -> Self {
        if ratio > STRONG_PRESSURE_THRESHOLD {
            Self::StrongBuy
        } else if ratio > MODERATE_PRESSURE_THRESHOLD {
            Self::ModerateBuy
        } else if ratio < -STRONG_PRESSURE_THRESHOLD {
            Self::StrongSell
        } else if ratio < -MODERATE_PRESSURE_THRESHOLD {
            Self::ModerateSell
        } else {
            Self::Balanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy Pressure",
            Self::ModerateBuy => "Moderate Buy Pressure",
            Self::Balanced => "Balanced",
            Self::ModerateSell => "Moderate Sell Pressure",
            Self::StrongSell => "Strong Sell Pressure",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::StrongBuy => Severity::Success,
            Self::ModerateBuy => Severity::Info,
            Self::Balanced => Severity::Secondary,
            Self::ModerateSell => Severity::Warning,
            Self::StrongSell => Severity::Danger,
        }
    }
}

impl std::fmt::Display for Pressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation hint attached to a pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Secondary,
    Warning,
    Danger,
}

/// Depth and imbalance statistics for one book
///
/// Monetary fields are rounded to 2 decimals, ratios to 3, percentages to 2.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct BookAnalysis {
    /// Sum of bid quantities
    pub total_bid_quantity: u64,

    /// Sum of ask quantities
    pub total_ask_quantity: u64,

    /// Sum of bid notional values
    pub total_bid_value: f64,

    /// Sum of ask notional values
    pub total_ask_value: f64,

    /// total_bid_quantity - total_ask_quantity
    pub quantity_imbalance: i64,

    /// total_bid_value - total_ask_value
    pub value_imbalance: f64,

    /// quantity_imbalance / total quantity, in [-1, 1]. >0 = buy pressure
    pub imbalance_ratio: f64,

    /// imbalance_ratio as a percentage
    pub imbalance_pct: f64,

    /// Qualitative pressure label
    pub pressure: Pressure,

    /// Presentation tag for the pressure label
    pub pressure_color: Severity,

    /// Quantity-weighted average bid price
    pub weighted_bid_price: f64,

    /// Quantity-weighted average ask price
    pub weighted_ask_price: f64,

    /// Notional value of the best 5 bid levels
    pub bid_depth_5: f64,

    /// Notional value of the best 5 ask levels
    pub ask_depth_5: f64,

    /// bid_depth_5 / ask_depth_5 (0 when there is no ask depth)
    pub depth_ratio: f64,
}

/// Calculate depth and imbalance statistics for a book
///
/// Never fails: an empty book yields all-zero figures labelled Balanced.
pub fn analyze(book: &Book) -> BookAnalysis {
    let bids = book.bids();
    let asks = book.asks();

    let total_bid_quantity = total_quantity(bids);
    let total_ask_quantity = total_quantity(asks);

    let total_bid_value = total_value(bids);
    let total_ask_value = total_value(asks);

    let quantity_imbalance = signed_difference(total_bid_quantity, total_ask_quantity);
    let value_imbalance = total_bid_value - total_ask_value;

    let imbalance_ratio = calculate_imbalance_ratio(total_bid_quantity, total_ask_quantity);
    let pressure = Pressure::from_imbalance_ratio(imbalance_ratio);

    let bid_depth_5 = total_value(book.top(Side::Bid, DEPTH_LEVELS));
    let ask_depth_5 = total_value(book.top(Side::Ask, DEPTH_LEVELS));

    let depth_ratio = if ask_depth_5 > 0.0 {
        round_dp(bid_depth_5 / ask_depth_5, 3)
    } else {
        0.0
    };

    BookAnalysis {
        total_bid_quantity,
        total_ask_quantity,
        total_bid_value: round_dp(total_bid_value, 2),
        total_ask_value: round_dp(total_ask_value, 2),
        quantity_imbalance,
        value_imbalance: round_dp(value_imbalance, 2),
        imbalance_ratio: round_dp(imbalance_ratio, 3),
        imbalance_pct: round_dp(imbalance_ratio * 100.0, 2),
        pressure,
        pressure_color: pressure.severity(),
        weighted_bid_price: round_dp(weighted_price(bids, total_bid_quantity), 2),
        weighted_ask_price: round_dp(weighted_price(asks, total_ask_quantity), 2),
        bid_depth_5: round_dp(bid_depth_5, 2),
        ask_depth_5: round_dp(ask_depth_5, 2),
        depth_ratio,
    }
}

/// Saturates at `u64::MAX` instead of overflowing
fn total_quantity(levels: &[PriceLevel]) -> u64 {
    levels
        .iter()
        .map(PriceLevel::quantity)
        .fold(0u64, u64::saturating_add)
}

/// `bid - ask`, clamped to the `i64` range
fn signed_difference(bid_quantity: u64, ask_quantity: u64) -> i64 {
    let diff = i128::from(bid_quantity) - i128::from(ask_quantity);
    i64::try_from(diff).unwrap_or(if diff > 0 { i64::MAX } else { i64::MIN })
}

fn total_value(levels: &[PriceLevel]) -> f64 {
    levels.iter().map(PriceLevel::value).sum()
}

/// Normalized signed imbalance: (bid - ask) / (bid + ask), 0 for an empty book
fn calculate_imbalance_ratio(bid_quantity: u64, ask_quantity: u64) -> f64 {
    let total = bid_quantity as f64 + ask_quantity as f64;
    if total == 0.0 {
        return 0.0;
    }
    (bid_quantity as f64 - ask_quantity as f64) / total
}

/// Formula: sum(price * qty) / sum(qty), 0 when the side holds no quantity
fn weighted_price(levels: &[PriceLevel], total_quantity: u64) -> f64 {
    if total_quantity == 0 {
        return 0.0;
    }
    let notional: f64 = levels
        .iter()
        .map(|l| l.price() * l.quantity() as f64)
        .sum();
    notional / total_quantity as f64
}
