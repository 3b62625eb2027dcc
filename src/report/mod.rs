// Report module for console rendering of order book reports
//
// Renders an OrderBookReport (or a whole batch outcome) as markdown. Each
// section is built independently and concatenated in a fixed order.

pub mod formatter;

use crate::orderbook::analyzer::OrderBookReport;
use crate::orderbook::batch::BatchOutcome;
use crate::orderbook::metrics::Severity;
use crate::orderbook::types::PriceLevel;

/// Number of levels per side shown in the console report
pub const TOP_LEVELS: usize = 5;

/// Render one report as markdown
///
/// Sections: header, price overview, top bids, top asks, depth summary, and
/// the trading signal when one is attached.
pub fn render_report(report: &OrderBookReport) -> String {
    let mut content = String::new();

    content.push_str(&build_header(report));
    content.push_str(&build_price_section(report));
    content.push_str(&build_levels_section("Top Bids", &report.bids));
    content.push_str(&build_levels_section("Top Asks", &report.asks));
    content.push_str(&build_depth_section(report));

    if report.signal.is_some() {
        content.push_str(&build_signal_section(report));
    }

    content
}

/// Render every report of a batch, followed by the skipped tickers
pub fn render_batch(outcome: &BatchOutcome) -> String {
    let mut content = String::new();

    for report in &outcome.reports {
        content.push_str(&render_report(report));
        content.push_str("---\n\n");
    }

    if !outcome.failed.is_empty() {
        content.push_str(&formatter::build_section_header("Skipped Tickers", 2));
        let items: Vec<String> = outcome
            .failed
            .iter()
            .map(|f| format!("**{}**: {}", f.ticker, f.reason))
            .collect();
        content.push_str(&formatter::build_list(&items, false));
        content.push('\n');
    }

    content
}

fn build_header(report: &OrderBookReport) -> String {
    let mut content = formatter::build_section_header(
        &format!("Order Book: {}", report.ticker),
        1,
    );
    content.push_str(&format!(
        "_Generated at {}_\n\n",
        formatter::format_datetime(report.timestamp)
    ));
    content
}

fn build_price_section(report: &OrderBookReport) -> String {
    let mut content = formatter::build_section_header("Price", 2);

    let headers = ["Metric", "Value"];
    let rows = vec![
        vec![
            "Current Price".to_string(),
            formatter::format_currency(report.current_price, 2),
        ],
        vec![
            "Spread".to_string(),
            format!(
                "{} ({})",
                formatter::format_currency(report.spread, 4),
                formatter::format_percentage(report.spread_pct)
            ),
        ],
    ];

    content.push_str(&formatter::build_table(&headers, &rows));
    content.push('\n');
    content
}

/// `$price x qty = $value` for the first levels of one side
fn build_levels_section(title: &str, levels: &[PriceLevel]) -> String {
    let mut content = formatter::build_section_header(title, 2);

    if levels.is_empty() {
        content.push_str("_No levels_\n\n");
        return content;
    }

    let items: Vec<String> = levels
        .iter()
        .take(TOP_LEVELS)
        .map(|level| {
            format!(
                "{} x {} = {}",
                formatter::format_currency(level.price(), 2),
                formatter::format_quantity(level.quantity()),
                formatter::format_currency(level.value(), 2)
            )
        })
        .collect();

    content.push_str(&formatter::build_list(&items, true));
    content.push('\n');
    content
}

fn build_depth_section(report: &OrderBookReport) -> String {
    let analysis = &report.analysis;
    let mut content = formatter::build_section_header("Depth Analysis", 2);

    let headers = ["Metric", "Bids", "Asks"];
    let rows = vec![
        vec![
            "Total Quantity".to_string(),
            formatter::format_quantity(analysis.total_bid_quantity),
            formatter::format_quantity(analysis.total_ask_quantity),
        ],
        vec![
            "Total Value".to_string(),
            formatter::format_currency(analysis.total_bid_value, 2),
            formatter::format_currency(analysis.total_ask_value, 2),
        ],
        vec![
            "Weighted Price".to_string(),
            formatter::format_currency(analysis.weighted_bid_price, 2),
            formatter::format_currency(analysis.weighted_ask_price, 2),
        ],
        vec![
            "Top-5 Depth".to_string(),
            formatter::format_currency(analysis.bid_depth_5, 2),
            formatter::format_currency(analysis.ask_depth_5, 2),
        ],
    ];
    content.push_str(&formatter::build_table(&headers, &rows));
    content.push('\n');

    let items = vec![
        format!(
            "Imbalance: {}",
            formatter::format_percentage(analysis.imbalance_pct)
        ),
        format!("Depth Ratio: {:.3}", analysis.depth_ratio),
        format!(
            "Pressure: {} {}",
            severity_indicator(analysis.pressure_color),
            analysis.pressure
        ),
    ];
    content.push_str(&formatter::build_list(&items, false));
    content.push('\n');
    content
}

fn build_signal_section(report: &OrderBookReport) -> String {
    let Some(signal) = &report.signal else {
        return String::new();
    };

    let mut content = formatter::build_section_header("Signal", 2);
    content.push_str(&format!(
        "**{}** (confidence {:.1}%)\n\n",
        signal.signal.as_str(),
        signal.confidence
    ));
    content.push_str(&format!("{}\n\n", signal.reasoning));
    content
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "🟢",
        Severity::Info => "🔵",
        Severity::Secondary => "⚪",
        Severity::Warning => "🟡",
        Severity::Danger => "🔴",
    }
}
