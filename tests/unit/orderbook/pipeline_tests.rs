// Deterministic end-to-end scenarios driven by a fixed liquidity sequence

use orderflow_provider::error::QuoteError;
use orderflow_provider::orderbook::{
    extract_features, generate_signal, BookSynthesizer, FixedSampler, OrderBookAnalyzer, Pressure,
    Severity, SignalKind,
};
use orderflow_provider::quotes::{Quote, QuoteSource};

/// Serves the same quote for every ticker
struct FixedQuote(Quote);

impl QuoteSource for FixedQuote {
    async fn fetch_quote(&self, _ticker: &str) -> Result<Quote, QuoteError> {
        Ok(self.0)
    }
}

fn reference_quote() -> Quote {
    Quote::from_parts(Some(100.0), Some(99.9), Some(100.1), Some(500), Some(500))
}

#[tokio::test]
async fn test_symmetric_book_holds() {
    let mut analyzer = OrderBookAnalyzer::new(
        FixedQuote(reference_quote()),
        BookSynthesizer::new(FixedSampler::constant(1.0)),
    );

    let report = analyzer.analyze_ticker("aapl", 5).await.unwrap();

    assert_eq!(report.ticker, "AAPL");
    assert_eq!(report.current_price, 100.0);
    assert_eq!(report.spread, 0.2);
    assert_eq!(report.spread_pct, 0.2);
    assert_eq!(report.bids.len(), 5);
    assert_eq!(report.asks.len(), 5);

    let analysis = &report.analysis;
    assert_eq!(analysis.total_bid_quantity, 2283);
    assert_eq!(analysis.total_ask_quantity, 2283);
    assert_eq!(analysis.quantity_imbalance, 0);
    assert_eq!(analysis.imbalance_ratio, 0.0);
    assert_eq!(analysis.pressure, Pressure::Balanced);
    assert_eq!(analysis.pressure_color, Severity::Secondary);
    // Asks sit at higher prices, so the same sizes carry more value
    assert!(analysis.value_imbalance < 0.0);
    assert!(analysis.depth_ratio < 1.0);

    let signal = report.signal.as_ref().unwrap();
    assert_eq!(signal.signal, SignalKind::Hold);
    assert_eq!(signal.confidence, 50.0);
}

#[tokio::test]
async fn test_bid_heavy_book_is_strong_buy() {
    // Five bid draws at 2.0, then five ask draws at 0.5
    let sampler = FixedSampler::new(vec![2.0, 2.0, 2.0, 2.0, 2.0, 0.5, 0.5, 0.5, 0.5, 0.5]);
    let mut analyzer =
        OrderBookAnalyzer::new(FixedQuote(reference_quote()), BookSynthesizer::new(sampler));

    let report = analyzer.analyze_ticker("TSLA", 5).await.unwrap();
    let analysis = &report.analysis;

    // 1500 + 750 + 500 + 375 + 300
    assert_eq!(analysis.total_bid_quantity, 3425);
    // 750 + 375 + 250 + 187 + 150
    assert_eq!(analysis.total_ask_quantity, 1712);
    assert_eq!(analysis.quantity_imbalance, 1713);
    assert_eq!(analysis.imbalance_ratio, 0.333);
    assert_eq!(analysis.imbalance_pct, 33.35);
    assert_eq!(analysis.pressure, Pressure::StrongBuy);
    assert!(analysis.depth_ratio > 1.1);

    let signal = report.signal.as_ref().unwrap();
    assert_eq!(signal.signal, SignalKind::StrongBuy);
    assert_eq!(signal.confidence, 33.3);
    assert!(signal.reasoning.contains("imbalance: 33.3%"));
}

#[tokio::test]
async fn test_get_order_book_has_no_signal() {
    let mut analyzer = OrderBookAnalyzer::new(
        FixedQuote(reference_quote()),
        BookSynthesizer::new(FixedSampler::constant(1.0)),
    );

    let report = analyzer.get_order_book("GOOGL", 3).await.unwrap();
    assert!(report.signal.is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("signal").is_none());
    assert_eq!(json["analysis"]["pressure"], "Balanced");
    assert_eq!(json["analysis"]["pressure_color"], "secondary");
}

#[tokio::test]
async fn test_signal_matches_analysis_of_same_book() {
    let mut analyzer = OrderBookAnalyzer::new(
        FixedQuote(reference_quote()),
        BookSynthesizer::seeded(2024),
    );

    let report = analyzer.analyze_ticker("MSFT", 10).await.unwrap();
    let attached = report.signal.clone().unwrap();

    assert_eq!(attached, generate_signal(&report.analysis));
    assert_eq!(attached.imbalance_ratio, report.analysis.imbalance_ratio);
    assert_eq!(attached.depth_ratio, report.analysis.depth_ratio);
}

#[tokio::test]
async fn test_features_follow_report() {
    let mut analyzer = OrderBookAnalyzer::new(
        FixedQuote(reference_quote()),
        BookSynthesizer::new(FixedSampler::constant(1.0)),
    );

    let report = analyzer.analyze_ticker("AAPL", 5).await.unwrap();
    let features = extract_features(Some(&report));

    assert_eq!(features.len(), 7);
    assert_eq!(features["ob_imbalance_ratio"], 0.0);
    assert_eq!(features["ob_spread_pct"], 0.2);
    assert_eq!(features["ob_quantity_imbalance"], 0.0);
    assert_eq!(features["ob_depth_ratio"], report.analysis.depth_ratio);
}

#[tokio::test]
async fn test_oversized_quote_size_does_not_overflow() {
    let quote = Quote::from_parts(Some(100.0), Some(99.9), Some(100.1), Some(1u64 << 62), Some(500));
    let mut analyzer = OrderBookAnalyzer::new(
        FixedQuote(quote),
        BookSynthesizer::new(FixedSampler::constant(1.0)),
    );

    let report = analyzer.analyze_ticker("HUGE", 10).await.unwrap();
    let analysis = &report.analysis;

    assert_eq!(report.bids[0].quantity(), 1u64 << 63);
    assert_eq!(analysis.total_bid_quantity, u64::MAX);
    assert_eq!(analysis.quantity_imbalance, i64::MAX);
    assert_eq!(analysis.imbalance_ratio, 1.0);
    assert_eq!(analysis.pressure, Pressure::StrongBuy);

    let signal = report.signal.as_ref().unwrap();
    assert_eq!(signal.signal, SignalKind::StrongBuy);
    assert_eq!(signal.confidence, 95.0);
}
