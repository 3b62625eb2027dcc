// Unit tests for markdown rendering of synthesized reports

use orderflow_provider::orderbook::{BookSynthesizer, FixedSampler, OrderBookAnalyzer};
use orderflow_provider::quotes::Quote;
use orderflow_provider::report::{render_report, TOP_LEVELS};

/// Analyzer whose quote source is never consulted
fn analyzer() -> OrderBookAnalyzer<UnusedQuotes, BookSynthesizer<FixedSampler>> {
    OrderBookAnalyzer::new(
        UnusedQuotes,
        BookSynthesizer::new(FixedSampler::constant(1.0)),
    )
}

struct UnusedQuotes;

impl orderflow_provider::quotes::QuoteSource for UnusedQuotes {
    async fn fetch_quote(
        &self,
        ticker: &str,
    ) -> Result<Quote, orderflow_provider::error::QuoteError> {
        Err(orderflow_provider::error::QuoteError::NotFound(
            ticker.to_string(),
        ))
    }
}

#[test]
fn test_only_top_levels_rendered() {
    let quote = Quote::from_parts(Some(100.0), Some(99.9), Some(100.1), Some(500), Some(500));
    let report = analyzer().build_report("aapl", &quote, 10);
    assert_eq!(report.bids.len(), 10);

    let rendered = render_report(&report);
    let bid_section = rendered
        .split("## Top Bids")
        .nth(1)
        .and_then(|s| s.split("## Top Asks").next())
        .unwrap();

    let lines: Vec<&str> = bid_section
        .lines()
        .filter(|l| l.contains(" x "))
        .collect();
    assert_eq!(lines.len(), TOP_LEVELS);
    assert_eq!(lines[0], "1. $99.90 x 1,000 = $99,900.00");
}

#[test]
fn test_balanced_book_pressure_line() {
    let quote = Quote::from_parts(Some(100.0), Some(99.9), Some(100.1), Some(500), Some(500));
    let report = analyzer().build_report("AAPL", &quote, 5);

    let rendered = render_report(&report);
    assert!(rendered.contains("# Order Book: AAPL"));
    assert!(rendered.contains("- Imbalance: 0.00%"));
    assert!(rendered.contains("- Pressure: ⚪ Balanced"));
    assert!(rendered.contains("| Total Quantity | 2,283 | 2,283 |"));
}
