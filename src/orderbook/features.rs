//! Flat feature projection for downstream models

use crate::orderbook::analyzer::OrderBookReport;
use std::collections::BTreeMap;

/// Feature names emitted by [`extract_features`]
pub const FEATURE_NAMES: [&str; 7] = [
    "ob_imbalance_ratio",
    "ob_depth_ratio",
    "ob_spread_pct",
    "ob_bid_depth_5",
    "ob_ask_depth_5",
    "ob_value_imbalance",
    "ob_quantity_imbalance",
];

/// Project a report onto named scalar features
///
/// Returns an empty map when there is no report.
pub fn extract_features(report: Option<&OrderBookReport>) -> BTreeMap<&'static str, f64> {
    let Some(report) = report else {
        return BTreeMap::new();
    };
    let analysis = &report.analysis;

    BTreeMap::from([
        ("ob_imbalance_ratio", analysis.imbalance_ratio),
        ("ob_depth_ratio", analysis.depth_ratio),
        ("ob_spread_pct", report.spread_pct),
        ("ob_bid_depth_5", analysis.bid_depth_5),
        ("ob_ask_depth_5", analysis.ask_depth_5),
        ("ob_value_imbalance", analysis.value_imbalance),
        ("ob_quantity_imbalance", analysis.quantity_imbalance as f64),
    ])
}
