//! Trading signal derived from book imbalance
//!
//! Maps `(imbalance_ratio, depth_ratio)` to one of five signal classes. Rules
//! are evaluated in order and the first match wins:
//!
//! | imbalance | depth ratio | signal | confidence |
//! |---|---|---|---|
//! | > 0.15 | > 1.1 | STRONG BUY | min(|r| × 100, 95) |
//! | > 0.05 | > 1.0 | BUY | min(|r| × 80, 75) |
//! | < -0.15 | < 0.9 | STRONG SELL | min(|r| × 100, 95) |
//! | < -0.05 | < 1.0 | SELL | min(|r| × 80, 75) |
//! | otherwise | | HOLD | 50 |

use crate::orderbook::metrics::BookAnalysis;
use crate::orderbook::rounding::round_dp;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::debug;

const HOLD_CONFIDENCE: f64 = 50.0;
const STRONG_CONFIDENCE_CAP: f64 = 95.0;
const MODERATE_CONFIDENCE_CAP: f64 = 75.0;

/// Discrete trading recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum SignalKind {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG SELL",
        }
    }

    /// Classify the ratios (first matching rule wins)
    pub fn classify(imbalance_ratio: f64, depth_ratio: f64) -> Self {
        if imbalance_ratio > 0.15 && depth_ratio > 1.1 {
            Self::StrongBuy
        } else if imbalance_ratio > 0.05 && depth_ratio > 1.0 {
            Self::Buy
        } else if imbalance_ratio < -0.15 && depth_ratio < 0.9 {
            Self::StrongSell
        } else if imbalance_ratio < -0.05 && depth_ratio < 1.0 {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    /// Confidence in percent, before rounding
    fn confidence(&self, imbalance_ratio: f64) -> f64 {
        let magnitude = imbalance_ratio.abs();
        match self {
            Self::StrongBuy | Self::StrongSell => (magnitude * 100.0).min(STRONG_CONFIDENCE_CAP),
            Self::Buy | Self::Sell => (magnitude * 80.0).min(MODERATE_CONFIDENCE_CAP),
            Self::Hold => HOLD_CONFIDENCE,
        }
    }

    fn reasoning(&self, imbalance_ratio: f64) -> String {
        let pct = format!("{:.1}%", imbalance_ratio * 100.0);
        match self {
            Self::StrongBuy => format!(
                "Strong buy pressure detected (imbalance: {}). Bid depth significantly exceeds ask depth.",
                pct
            ),
            Self::Buy => format!(
                "Moderate buy pressure (imbalance: {}). More buyers than sellers in the order book.",
                pct
            ),
            Self::StrongSell => format!(
                "Strong sell pressure detected (imbalance: {}). Ask depth significantly exceeds bid depth.",
                pct
            ),
            Self::Sell => format!(
                "Moderate sell pressure (imbalance: {}). More sellers than buyers in the order book.",
                pct
            ),
            Self::Hold => "Order book is balanced. No clear directional bias detected.".to_string(),
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal with its confidence and rationale
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MarketSignal {
    /// Recommended action
    pub signal: SignalKind,

    /// Confidence in percent (1 decimal)
    pub confidence: f64,

    /// Imbalance ratio the signal was derived from
    pub imbalance_ratio: f64,

    /// Depth ratio the signal was derived from
    pub depth_ratio: f64,

    /// Human-readable explanation
    pub reasoning: String,
}

/// Derive a trading signal from a book analysis
pub fn generate_signal(analysis: &BookAnalysis) -> MarketSignal {
    signal_from_ratios(analysis.imbalance_ratio, analysis.depth_ratio)
}

/// Derive a trading signal directly from the two ratios
pub fn signal_from_ratios(imbalance_ratio: f64, depth_ratio: f64) -> MarketSignal {
    let kind = SignalKind::classify(imbalance_ratio, depth_ratio);
    let confidence = round_dp(kind.confidence(imbalance_ratio), 1);

    debug!(
        signal = %kind,
        confidence,
        imbalance_ratio,
        depth_ratio,
        "Generated order book signal"
    );

    MarketSignal {
        signal: kind,
        confidence,
        imbalance_ratio,
        depth_ratio,
        reasoning: kind.reasoning(imbalance_ratio),
    }
}
