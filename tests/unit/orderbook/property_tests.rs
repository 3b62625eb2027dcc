// Structural properties of synthesized books across many seeds

use orderflow_provider::orderbook::rounding::round_dp;
use orderflow_provider::orderbook::synth::MIN_LEVEL_QUANTITY;
use orderflow_provider::orderbook::{analyze, generate_signal, BookSynthesizer, SignalKind};
use orderflow_provider::quotes::Quote;

fn quotes() -> Vec<Quote> {
    vec![
        Quote::from_parts(Some(100.0), Some(99.9), Some(100.1), Some(500), Some(500)),
        Quote::from_parts(Some(189.5), Some(189.48), Some(189.52), Some(3), Some(4)),
        Quote::from_parts(Some(12.34), None, None, None, None),
        Quote::from_parts(Some(2500.0), Some(2499.0), Some(2501.5), Some(12_000), Some(80)),
    ]
}

#[test]
fn test_ladders_are_strictly_ordered() {
    for quote in quotes() {
        for seed in 0..25 {
            let book = BookSynthesizer::seeded(seed).synthesize(&quote, 20);

            assert!(book.bids().windows(2).all(|w| w[0].price() > w[1].price()));
            assert!(book.asks().windows(2).all(|w| w[0].price() < w[1].price()));

            let best_bid = book.best_bid().unwrap().price();
            let best_ask = book.best_ask().unwrap().price();
            assert!(best_bid < best_ask, "crossed book for seed {}", seed);
        }
    }
}

#[test]
fn test_levels_are_numbered_and_sized() {
    for quote in quotes() {
        for seed in 0..25 {
            let book = BookSynthesizer::seeded(seed).synthesize(&quote, 10);

            for side in [book.bids(), book.asks()] {
                assert_eq!(side.len(), 10);
                for (i, level) in side.iter().enumerate() {
                    assert_eq!(level.level(), i as u32 + 1);
                    assert!(level.quantity() >= MIN_LEVEL_QUANTITY);
                    assert_eq!(
                        level.value(),
                        round_dp(level.price() * level.quantity() as f64, 2)
                    );
                }
            }
        }
    }
}

#[test]
fn test_analysis_ratios_are_bounded() {
    for quote in quotes() {
        for seed in 0..25 {
            let book = BookSynthesizer::seeded(seed).synthesize(&quote, 15);
            let analysis = analyze(&book);

            assert!((-1.0..=1.0).contains(&analysis.imbalance_ratio));
            assert!(analysis.depth_ratio > 0.0);
            assert_eq!(
                analysis.quantity_imbalance,
                analysis.total_bid_quantity as i64 - analysis.total_ask_quantity as i64
            );
            assert_eq!(
                analysis.pressure_color,
                analysis.pressure.severity()
            );

            let signal = generate_signal(&analysis);
            match signal.signal {
                SignalKind::Hold => assert_eq!(signal.confidence, 50.0),
                SignalKind::StrongBuy | SignalKind::StrongSell => {
                    assert!(signal.confidence <= 95.0)
                }
                SignalKind::Buy | SignalKind::Sell => assert!(signal.confidence <= 75.0),
            }
        }
    }
}

#[test]
fn test_different_seeds_change_liquidity_only() {
    let quote = quotes().remove(0);
    let first = BookSynthesizer::seeded(1).synthesize(&quote, 10);
    let second = BookSynthesizer::seeded(2).synthesize(&quote, 10);

    let prices = |book: &orderflow_provider::orderbook::Book| -> Vec<f64> {
        book.bids().iter().map(|l| l.price()).collect()
    };
    assert_eq!(prices(&first), prices(&second));
    assert_ne!(first, second);
}
